//! In-memory user store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use domain::{ensure_unique_ids, DomainError, DomainResult, User};

use super::UserRepository;

/// Failure while loading the initial users.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// `UserRepository` backed by a vector behind an async lock.
///
/// Keeps insertion order and rejects duplicate ids.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `users`.
    pub fn with_users(users: Vec<User>) -> DomainResult<Self> {
        ensure_unique_ids(&users)?;
        Ok(Self {
            users: RwLock::new(users),
        })
    }

    /// Load users from a JSON array such as `[{"id":1,"name":"Naruto","age":10}]`.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let users: Vec<User> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded {} user(s) from {}", users.len(), path.display());
        Ok(Self::with_users(users)?)
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn find_one(&self, id: i64) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    async fn delete(&self, id: i64) -> bool {
        let mut users = self.users.write().await;
        match users.iter().position(|user| user.id == id) {
            Some(index) => {
                users.remove(index);
                true
            }
            None => false,
        }
    }

    async fn save(&self, user: User) -> bool {
        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.id == user.id) {
            debug!("Rejected user {}: id already taken", user.id);
            return false;
        }
        users.push(user);
        true
    }

    async fn count(&self) -> usize {
        self.len().await
    }
}
