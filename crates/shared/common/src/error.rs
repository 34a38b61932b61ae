//! Unified error handling.
//!
//! Provides a single error type for the repository, service, and HTTP
//! layers. Only the HTTP boundary turns a variant into a status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::ValidationError;
use thiserror::Error;

use crate::response::ApiResponse;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Business rules
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("email already exists")]
    DuplicateEmail,

    // Resource errors
    #[error("user not found")]
    NotFound,

    #[error("route not found")]
    RouteNotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    // Request shape
    #[error("invalid request body: {0}")]
    Decode(String),

    #[error("{0}")]
    BadRequest(String),

    // Storage failures that are neither duplicates nor missing rows
    #[cfg(feature = "database")]
    #[error("storage error")]
    Storage(#[source] sea_orm::DbErr),

    #[error("request timed out")]
    Timeout,

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs and clients
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(ValidationError::EmptyName) => "EMPTY_NAME",
            AppError::Validation(ValidationError::EmptyEmail) => "EMPTY_EMAIL",
            AppError::Validation(ValidationError::InvalidEmailFormat) => "INVALID_EMAIL_FORMAT",
            AppError::Validation(ValidationError::InvalidAge) => "INVALID_AGE",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::NotFound => "NOT_FOUND",
            AppError::RouteNotFound => "ROUTE_NOT_FOUND",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Timeout => "TIMEOUT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::DuplicateEmail
            | AppError::Decode(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            #[cfg(feature = "database")]
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Client errors carry their precise message
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiResponse::<()>::error(self.user_message());

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn decode(msg: impl Into<String>) -> Self {
        AppError::Decode(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
