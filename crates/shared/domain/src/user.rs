//! User domain entity and related types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::ADULT_AGE;
use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// Ids are assigned by whoever creates the user; nothing in this
/// workspace generates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Check if user is of age
    pub fn is_of_age(&self) -> bool {
        is_of_age(self.age)
    }
}

/// `true` iff `age` is at least [`ADULT_AGE`].
pub fn is_of_age(age: u32) -> bool {
    age >= ADULT_AGE
}

/// Reject a collection in which two users share an id.
pub fn ensure_unique_ids(users: &[User]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(users.len());
    for user in users {
        if !seen.insert(user.id) {
            return Err(DomainError::conflict(format!("User {}", user.id)));
        }
    }
    Ok(())
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// Externally assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// User display name
    #[cfg_attr(feature = "openapi", schema(example = "Naruto"))]
    pub name: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 10))]
    pub age: u32,
}

impl From<CreateUser> for User {
    fn from(payload: CreateUser) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            age: payload.age,
        }
    }
}

/// User response (read projection returned to clients)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User identifier
    pub id: i64,
    /// User display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Whether the user is 18 or older
    pub is_of_age: bool,
}

impl UserResponse {
    /// Map a sequence of users, keeping order and length.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Vec<Self> {
        users.into_iter().map(Self::from).collect()
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            is_of_age: user.is_of_age(),
            id: user.id,
            name: user.name,
            age: user.age,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            age: user.age,
            is_of_age: user.is_of_age(),
        }
    }
}
