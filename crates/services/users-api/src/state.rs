//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::UsersApiConfig;
use crate::repository::UserRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub config: UsersApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(users: Arc<dyn UserRepository>, config: UsersApiConfig) -> Self {
        Self { users, config }
    }
}
