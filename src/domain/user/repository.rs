//! Collaborator contracts for the cached user store
//!
//! `UserRepository` is the authoritative, durable store of record.
//! `UserCache` is a purely advisory tier: it holds no data the
//! authoritative store does not also hold and gives no durability
//! guarantee.

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId, UserInput};
use crate::domain::DomainError;

/// Contract for the authoritative user store
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// List every persisted user
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by id
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Persist a user, assigning an id and creation timestamp when the
    /// input carries none. Saving under an existing id overwrites `name`
    /// and `age` and preserves `created_at`.
    async fn save(&self, input: UserInput) -> Result<User, DomainError>;

    /// Delete a user by id, returning whether it existed
    async fn delete_by_id(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Delete every user
    async fn delete_all(&self) -> Result<(), DomainError>;
}

/// Contract for the cache tier
#[async_trait]
pub trait UserCache: Send + Sync + Debug {
    /// Enumerate every cached user (empty if never populated or flushed)
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Get a cached user by id
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Store a user under its id
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Remove a cached user; absent keys are not an error
    async fn delete_by_id(&self, id: &UserId) -> Result<(), DomainError>;

    /// Remove every cached user
    async fn delete_all(&self) -> Result<(), DomainError>;
}
