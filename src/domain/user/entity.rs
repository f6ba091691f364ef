//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};

/// User identifier - non-empty string, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh server-side identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user entity
///
/// `id` and `created_at` are assigned by the authoritative store at first
/// persistence and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<i32>,
    /// Creation timestamp, set once at first persistence
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user entity with a fresh creation timestamp
    pub fn new(id: UserId, name: Option<String>, age: Option<i32>) -> Self {
        Self {
            id,
            name,
            age,
            created_at: Utc::now(),
        }
    }

    /// Override the creation timestamp (used when restoring from storage)
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Write payload for the user store
///
/// `id` absent means "create": the authoritative store assigns one on
/// insert. `id` present means a full-field overwrite of `name` and `age`
/// under that key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl UserInput {
    /// Create an empty input (store assigns the id)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }
}

impl From<&User> for UserInput {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id().clone()),
            name: user.name().map(str::to_string),
            age: user.age(),
        }
    }
}
