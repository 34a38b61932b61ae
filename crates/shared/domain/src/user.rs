//! User domain entity and related types.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{EMAIL_PATTERN, MAX_AGE, MIN_AGE};
use crate::error::{ValidationError, ValidationResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Check whether `email` matches the accepted address pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// User domain entity.
///
/// A value built from a request and not yet persisted carries `id == 0`
/// and epoch timestamps; storage assigns the real values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Server-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub name: String,
    /// Unique email address
    #[cfg_attr(feature = "openapi", schema(example = "ana@example.com"))]
    pub email: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub age: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build an unpersisted user from its editable fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            ..Self::default()
        }
    }

    /// Check business rules. The first violated rule is reported.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmailFormat);
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::InvalidAge);
        }
        Ok(())
    }

    /// Replace the editable fields wholesale.
    pub fn apply(&mut self, changes: UpdateUserRequest) {
        self.name = changes.name;
        self.email = changes.email;
        self.age = changes.age;
    }
}

/// User creation payload.
///
/// Missing fields decode to empty/zero values so that they surface as
/// validation errors rather than decode errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct CreateUserRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "ana@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = 30, minimum = 0, maximum = 150))]
    pub age: i32,
}

/// User update payload. All three fields replace the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct UpdateUserRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Ana B"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "ana@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = 31, minimum = 0, maximum = 150))]
    pub age: i32,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User::new(req.name, req.email, req.age)
    }
}
