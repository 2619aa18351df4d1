//! Repository layer for data access.

mod memory;
mod user_repository;

pub use memory::{InMemoryUserStore, SeedError};
pub use user_repository::UserRepository;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
