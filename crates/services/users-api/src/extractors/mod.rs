//! Request extractors that reject with the response envelope.

mod json_payload;
mod user_id;

pub use json_payload::JsonPayload;
pub use user_id::UserId;
