//! Unified error handling for HTTP.
//!
//! Every error renders as the `{success: false, data: <message>}` envelope
//! with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

/// Application error types.
///
/// The message is user-facing and returned verbatim as `data`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Lookup found nothing. Expected outcome, not a system failure.
    #[error("{0}")]
    NotFound(String),

    /// Repository reported `false` for a write
    #[error("{0}")]
    OperationFailed(String),

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::OperationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, ApiResponse::failure(self.to_string())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(message))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn operation_failed(msg: impl Into<String>) -> Self {
        AppError::OperationFailed(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}
