//! User id path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;

/// Extractor for the `:id` path parameter.
///
/// Accepts non-negative integers only; anything else is rejected with 400
/// before a handler runs.
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("invalid user id"))?;

        parse_user_id(&raw)
            .map(UserId)
            .ok_or_else(|| AppError::bad_request("invalid user id"))
    }
}

fn parse_user_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 0)
}
