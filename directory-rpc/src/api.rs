use crate::error::{RpcError, RpcResult};
use crate::handlers::UserHandler;

use directory_service::source::{seed_store, SeedOutcome, UserSource};

/// Entry point for a front-end session.
///
/// `initialize` runs the startup fetch exactly once; the directory is
/// usable before, during a failed seed, and after.
#[derive(Debug, Default)]
pub struct DirectoryApi {
    user_handler: UserHandler,
    seed: Option<SeedOutcome>,
}

impl DirectoryApi {
    pub fn new() -> Self {
        Self {
            user_handler: UserHandler::new(),
            seed: None,
        }
    }

    pub async fn initialize(&mut self, source: &dyn UserSource) -> RpcResult<SeedOutcome> {
        if self.seed.is_some() {
            return Err(RpcError::InvalidRequest(
                "directory already initialized".to_string(),
            ));
        }

        let outcome = seed_store(self.user_handler.store_mut(), source).await;
        if let SeedOutcome::Failed(reason) = &outcome {
            tracing::warn!(%reason, "Starting with an empty directory");
        }
        self.seed = Some(outcome.clone());
        Ok(outcome)
    }

    /// Count a startup that could not even reach its source as a failed seed.
    pub fn record_seed_failure(&mut self, reason: impl Into<String>) -> RpcResult<SeedOutcome> {
        if self.seed.is_some() {
            return Err(RpcError::InvalidRequest(
                "directory already initialized".to_string(),
            ));
        }

        let reason = reason.into();
        tracing::warn!(%reason, "Starting with an empty directory");
        let outcome = SeedOutcome::Failed(reason);
        self.seed = Some(outcome.clone());
        Ok(outcome)
    }

    pub fn is_initialized(&self) -> bool {
        self.seed.is_some()
    }

    pub fn seed_outcome(&self) -> Option<&SeedOutcome> {
        self.seed.as_ref()
    }

    pub fn user_handler(&self) -> &UserHandler {
        &self.user_handler
    }

    pub fn user_handler_mut(&mut self) -> &mut UserHandler {
        &mut self.user_handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use directory_service::source::FetchError;
    use directory_service::{NewUser, User};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl UserSource for CountingSource {
        async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::Http {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(vec![User::new(
                5,
                "Ann".into(),
                "Lee".into(),
                "a@b.com".into(),
            )])
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[tokio::test]
    async fn test_initialize_once() {
        let source = CountingSource::new(false);
        let mut api = DirectoryApi::new();

        let outcome = api.initialize(&source).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Loaded(1));
        assert!(api.is_initialized());

        let again = api.initialize(&source).await;
        assert!(matches!(again, Err(RpcError::InvalidRequest(_))));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_empty_usable_directory() {
        let source = CountingSource::new(true);
        let mut api = DirectoryApi::new();

        let outcome = api.initialize(&source).await.unwrap();
        assert!(matches!(outcome, SeedOutcome::Failed(_)));
        assert!(api.user_handler().list_active().is_empty());

        let user = api
            .user_handler_mut()
            .add_user(NewUser::new("Sam", "Kim", "s@k.io"))
            .unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_record_seed_failure() {
        let mut api = DirectoryApi::new();

        let outcome = api.record_seed_failure("bad client").unwrap();
        assert_eq!(outcome, SeedOutcome::Failed("bad client".to_string()));
        assert_eq!(api.seed_outcome(), Some(&outcome));
        assert!(api.user_handler().list_active().is_empty());

        // Counts as the one startup attempt
        let source = CountingSource::new(false);
        assert!(api.initialize(&source).await.is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_seeded_scenario() {
        let source = CountingSource::new(false);
        let mut api = DirectoryApi::new();
        api.initialize(&source).await.unwrap();

        let handler = api.user_handler_mut();
        let sam = handler
            .add_user(NewUser::new("Sam", "Kim", "s@k.io"))
            .unwrap();
        assert_eq!(sam.id, 6);
        assert_eq!(handler.list_active().len(), 2);

        handler.remove_user(5);
        assert_eq!(handler.list_active(), vec![sam]);
    }
}
