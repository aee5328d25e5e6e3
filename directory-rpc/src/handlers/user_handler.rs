use crate::error::{RpcError, RpcResult};
use directory_service::models::{NewUser, User};
use directory_service::services::UserStore;

/// Operations the front-end invokes on the directory.
#[derive(Debug, Default)]
pub struct UserHandler {
    store: UserStore,
}

impl UserHandler {
    pub fn new() -> Self {
        Self {
            store: UserStore::new(),
        }
    }

    pub fn load_users(&mut self, users: Vec<User>) {
        self.store.load(users);
    }

    /// Called on form submission.
    pub fn add_user(&mut self, candidate: NewUser) -> RpcResult<User> {
        Ok(self.store.add(candidate)?)
    }

    /// Called on a confirmed delete. Returns the removed user, if any.
    pub fn remove_user(&mut self, id: u64) -> Option<User> {
        self.store.remove(id)
    }

    pub fn get_user(&self, id: u64) -> RpcResult<User> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| RpcError::InvalidRequest(format!("User with id {} not found", id)))
    }

    pub fn list_active(&self) -> Vec<User> {
        self.store.list_active().into_iter().cloned().collect()
    }

    pub fn active_count(&self) -> usize {
        self.store.active_count()
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut UserStore {
        &mut self.store
    }
}
