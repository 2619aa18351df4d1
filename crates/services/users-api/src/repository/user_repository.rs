//! User repository contract.

use async_trait::async_trait;

use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage capability the handlers depend on.
///
/// Writes report their outcome as a plain `bool`: `false` is an expected
/// failure the caller must branch on, not an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, in storage order
    async fn list(&self) -> Vec<User>;

    /// User with the given id, if any
    async fn find_one(&self, id: i64) -> Option<User>;

    /// Remove the user; `true` only if something was removed
    async fn delete(&self, id: i64) -> bool;

    /// Store a new user; `true` if it was accepted
    async fn save(&self, user: User) -> bool;

    /// Number of stored users
    async fn count(&self) -> usize;
}
