use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewUser, User};
use crate::validation::validate_candidate;

use std::collections::HashSet;

/// Authoritative in-memory list of users for one session.
///
/// Entries keep insertion order. Callers that share a store across tasks
/// must serialize access; id assignment reads the current maximum.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Replace the whole collection. Later duplicates of an id are dropped.
    pub fn load(&mut self, users: Vec<User>) {
        let mut seen = HashSet::with_capacity(users.len());
        let mut loaded = Vec::with_capacity(users.len());

        for user in users {
            if seen.insert(user.id) {
                loaded.push(user);
            } else {
                tracing::warn!(id = user.id, "Dropping user with duplicate id");
            }
        }

        tracing::debug!(count = loaded.len(), "Loaded users");
        self.users = loaded;
    }

    pub fn add(&mut self, candidate: NewUser) -> ServiceResult<User> {
        if let Err(e) = validate_candidate(&candidate) {
            tracing::debug!(error = %e, "Rejected candidate");
            return Err(e.into());
        }

        let id = self.next_id()?;
        let user = User::new(
            id,
            candidate.first_name.trim().to_string(),
            candidate.last_name.trim().to_string(),
            candidate.email,
        );
        self.users.push(user.clone());

        tracing::info!(id, email = %user.email, "Added user");
        Ok(user)
    }

    /// Remove the entry with `id`. An absent id is not an error.
    pub fn remove(&mut self, id: u64) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        let removed = self.users.remove(index);
        tracing::info!(id, "Removed user");
        Some(removed)
    }

    pub fn list_active(&self) -> Vec<&User> {
        self.users.iter().filter(|u| u.is_active()).collect()
    }

    pub fn active_count(&self) -> usize {
        self.users.iter().filter(|u| u.is_active()).count()
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Every entry, hidden ones included.
    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // max + 1, not len + 1: remote ids may be sparse and removals leave gaps
    fn next_id(&self) -> ServiceResult<u64> {
        match self.users.iter().map(|u| u.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(ServiceError::IdsExhausted(max)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    fn remote(id: u64, first_name: &str, status: bool) -> User {
        User {
            id,
            first_name: first_name.to_string(),
            last_name: "Remote".to_string(),
            email: format!("{}@remote.com", first_name.to_lowercase()),
            status,
        }
    }

    fn active_ids(store: &UserStore) -> Vec<u64> {
        store.list_active().iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_add_to_empty_store_assigns_one() {
        let mut store = UserStore::new();
        let user = store.add(NewUser::new("Sam", "Kim", "s@k.io")).unwrap();
        assert_eq!(user.id, 1);
        assert!(user.status);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut store = UserStore::new();
        let mut last = 0;
        for i in 0..10 {
            let user = store
                .add(NewUser::new(format!("User{}", i), "Test", "t@t.com"))
                .unwrap();
            assert!(user.id > last);
            last = user.id;
        }
        assert_eq!(last, 10);
    }

    #[test]
    fn test_add_uses_max_not_length() {
        let mut store = UserStore::new();
        store.load(vec![remote(40, "Zed", true), remote(7, "Amy", true)]);

        let user = store.add(NewUser::new("Sam", "Kim", "s@k.io")).unwrap();
        assert_eq!(user.id, 41);
    }

    #[test]
    fn test_add_after_removal_keeps_counting_from_max() {
        let mut store = UserStore::new();
        let a = store.add(NewUser::new("A", "A", "a@a.com")).unwrap();
        let b = store.add(NewUser::new("B", "B", "b@b.com")).unwrap();
        store.remove(a.id);

        let c = store.add(NewUser::new("C", "C", "c@c.com")).unwrap();
        assert_eq!(c.id, b.id + 1);
    }

    #[test]
    fn test_removing_max_id_lowers_next_id() {
        let mut store = UserStore::new();
        store.load(vec![remote(3, "A", true), remote(9, "B", true)]);
        store.remove(9);

        // Only the surviving max counts
        let user = store.add(NewUser::new("C", "C", "c@c.com")).unwrap();
        assert_eq!(user.id, 4);
    }

    #[test]
    fn test_add_trims_names() {
        let mut store = UserStore::new();
        let user = store
            .add(NewUser::new("  Sam ", "\tKim", "s@k.io"))
            .unwrap();
        assert_eq!(user.first_name, "Sam");
        assert_eq!(user.last_name, "Kim");
    }

    #[test]
    fn test_rejected_candidate_leaves_store_unchanged() {
        let mut store = UserStore::new();
        let err = store.add(NewUser::new("", "Kim", "s@k.io")).unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());

        let err = store.add(NewUser::new("Sam", "Kim", "bad@")).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::InvalidEmail { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_exhausted() {
        let mut store = UserStore::new();
        store.load(vec![remote(u64::MAX, "Max", true)]);

        let err = store.add(NewUser::new("Sam", "Kim", "s@k.io")).unwrap_err();
        assert!(matches!(err, ServiceError::IdsExhausted(u64::MAX)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = UserStore::new();
        store.load(vec![remote(1, "A", true), remote(2, "B", true)]);
        let before = active_ids(&store);

        assert!(store.remove(99).is_none());
        assert_eq!(active_ids(&store), before);
    }

    #[test]
    fn test_remove_excludes_id_from_listing() {
        let mut store = UserStore::new();
        store.load(vec![remote(1, "A", true), remote(2, "B", true), remote(3, "C", true)]);

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.first_name, "B");
        assert_eq!(active_ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_list_active_skips_hidden_users() {
        let mut store = UserStore::new();
        store.load(vec![
            remote(1, "A", true),
            remote(2, "B", false),
            remote(3, "C", true),
        ]);

        assert_eq!(active_ids(&store), vec![1, 3]);
        assert_eq!(store.active_count(), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_hidden_users_still_count_for_ids() {
        let mut store = UserStore::new();
        store.load(vec![remote(1, "A", true), remote(8, "Hidden", false)]);

        let user = store.add(NewUser::new("Sam", "Kim", "s@k.io")).unwrap();
        assert_eq!(user.id, 9);
    }

    #[test]
    fn test_load_replaces_collection() {
        let mut store = UserStore::new();
        store.add(NewUser::new("Sam", "Kim", "s@k.io")).unwrap();
        store.load(vec![remote(5, "Ann", true)]);

        assert_eq!(active_ids(&store), vec![5]);
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let mut store = UserStore::new();
        store.load(vec![
            remote(1, "First", true),
            remote(2, "B", true),
            remote(1, "Second", true),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().first_name, "First");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = UserStore::new();
        store.load(vec![remote(10, "A", true), remote(2, "B", true)]);
        store.add(NewUser::new("C", "C", "c@c.com")).unwrap();

        assert_eq!(active_ids(&store), vec![10, 2, 11]);
    }

    #[test]
    fn test_load_add_remove_scenario() {
        let mut store = UserStore::new();
        store.load(vec![User {
            id: 5,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@b.com".to_string(),
            status: true,
        }]);
        assert_eq!(active_ids(&store), vec![5]);

        let sam = store.add(NewUser::new("Sam", "Kim", "s@k.io")).unwrap();
        assert_eq!(sam.id, 6);
        assert!(sam.status);
        assert_eq!(store.list_active().len(), 2);

        store.remove(5);
        let active = store.list_active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0], &sam);
    }
}
