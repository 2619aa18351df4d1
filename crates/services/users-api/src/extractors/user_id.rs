//! `:id` path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::debug;

use common::AppError;
use domain::MSG_INVALID_USER_ID;

/// Integer user id taken from the path.
///
/// A non-integer segment is answered with 400 before any handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                debug!("Rejected user id: {}", e.body_text());
                AppError::bad_request(MSG_INVALID_USER_ID)
            })?;

        Ok(UserId(id))
    }
}
