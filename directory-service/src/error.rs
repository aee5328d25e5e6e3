use thiserror::Error;

use crate::validation::ValidationError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("No ids left to assign after {0}")]
    IdsExhausted(u64),
}

impl ServiceError {
    /// Validation failures are reported to the operator; everything else is logged.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}
