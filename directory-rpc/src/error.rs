use std::fmt;

use directory_service::ServiceError;

pub type RpcResult<T> = Result<T, RpcError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    /// Candidate rejected; the message is meant for the operator
    Validation(String),
    ServiceError(String),
    InvalidRequest(String),
}

impl RpcError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RpcError::Validation(_))
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::Validation(msg) => write!(f, "{}", msg),
            RpcError::ServiceError(msg) => write!(f, "Service error: {}", msg),
            RpcError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for RpcError {}

impl From<ServiceError> for RpcError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => RpcError::Validation(e.to_string()),
            other => RpcError::ServiceError(other.to_string()),
        }
    }
}
