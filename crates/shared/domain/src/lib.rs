//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The HTTP service depends on it for the user entity and its read projection.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{ensure_unique_ids, is_of_age, CreateUser, User, UserResponse};
