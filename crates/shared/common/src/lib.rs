//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling rendered as response envelopes
//! - The `{success, data}` response envelope
//! - Configuration structures
//! - Tracing initialisation

pub mod config;
pub mod error;
pub mod response;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use response::{ApiResponse, Created};
