//! JSON body extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use common::AppError;
use domain::MSG_INVALID_USER_PAYLOAD;

/// JSON extractor whose rejection is the `{success: false}` envelope.
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            debug!("Rejected user payload: {}", e.body_text());
            AppError::bad_request(MSG_INVALID_USER_PAYLOAD)
        })?;

        Ok(JsonPayload(value))
    }
}
