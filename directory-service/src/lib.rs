// Directory Service Library
// In-memory user directory: model, validation, store and startup seeding

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod source;
pub mod validation;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};

pub use config::{ConfigError, DirectoryConfig};
pub use logging::{init_logging, LoggingError};
pub use models::{NewUser, User};
pub use services::UserStore;
pub use source::{seed_store, FetchError, HttpUserSource, SeedOutcome, UserSource};
pub use validation::{validate_candidate, Field, ValidationError};
