//! Domain-level errors.
//!
//! These errors represent business rule violations on a user record.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Validation failures, reported one at a time in rule order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `name` is empty
    #[error("name is required")]
    EmptyName,

    /// `email` is empty
    #[error("email is required")]
    EmptyEmail,

    /// `email` does not look like an address
    #[error("email format is invalid")]
    InvalidEmailFormat,

    /// `age` is outside the accepted range
    #[error("age must be between 0 and 150")]
    InvalidAge,
}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
