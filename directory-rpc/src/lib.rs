pub mod api;
pub mod error;
pub mod handlers;

pub use api::DirectoryApi;
pub use error::{RpcError, RpcResult};
pub use handlers::UserHandler;

// Re-export types needed by clients
pub use directory_service::{NewUser, SeedOutcome, User, UserSource};
pub use directory_service;
