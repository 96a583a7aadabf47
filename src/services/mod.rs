//! Request-independent business logic behind the HTTP routes.

pub mod advocates;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
