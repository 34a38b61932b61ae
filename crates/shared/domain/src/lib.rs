//! Domain layer - Core business entities and validation rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user service and its HTTP layer share these types.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{ValidationError, ValidationResult};
pub use user::{is_valid_email, CreateUserRequest, UpdateUserRequest, User};
