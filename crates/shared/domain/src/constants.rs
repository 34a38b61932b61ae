//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Pattern an email address must match to be accepted
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Minimum accepted age (inclusive)
pub const MIN_AGE: i32 = 0;

/// Maximum accepted age (inclusive)
pub const MAX_AGE: i32 = 150;

// =============================================================================
// Storage limits
// =============================================================================

/// Column width of `users.name`
pub const MAX_NAME_LENGTH: u32 = 80;

/// Column width of `users.email`
pub const MAX_EMAIL_LENGTH: u32 = 100;
