use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Outcome categories the routes translate into HTTP responses.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    /// Caller input failed validation.
    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    /// Anything the caller cannot fix; details are only logged.
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Every persistence failure is internal; absence is reported by the
/// services themselves.
impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
