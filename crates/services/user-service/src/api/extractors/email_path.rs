//! Email path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;

/// Extractor for the `:email` path parameter.
///
/// Only decoding is checked here; format validation belongs to the service.
pub struct EmailPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for EmailPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(email) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(format!("invalid email: {}", e.body_text())))?;

        Ok(EmailPath(email))
    }
}
