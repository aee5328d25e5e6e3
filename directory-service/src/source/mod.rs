// Startup user source
// One-shot fetch that seeds the store when the session begins

pub mod http;

pub use http::{FetchError, HttpUserSource};

use async_trait::async_trait;

use crate::models::User;
use crate::services::UserStore;

/// Where the initial user list comes from.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// Result of the startup seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Loaded(usize),
    Failed(String),
}

impl SeedOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, SeedOutcome::Loaded(_))
    }
}

/// Fetch once and load the result into `store`.
///
/// A failed fetch is logged and leaves the store as it was. There is no retry.
pub async fn seed_store(store: &mut UserStore, source: &dyn UserSource) -> SeedOutcome {
    tracing::info!(source = %source.describe(), "Loading users");

    match source.fetch_users().await {
        Ok(users) => {
            store.load(users);
            tracing::info!(
                total = store.len(),
                active = store.active_count(),
                "Users loaded"
            );
            SeedOutcome::Loaded(store.len())
        }
        Err(e) => {
            tracing::error!(error = %e, source = %source.describe(), "Failed to load users");
            SeedOutcome::Failed(e.to_string())
        }
    }
}
