//! In-memory authoritative user store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserInput, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let map = users
            .into_iter()
            .map(|u| (u.id().as_str().to_string(), u))
            .collect();

        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by_key(|u| u.created_at());

        Ok(result)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn save(&self, input: UserInput) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let id = input.id.unwrap_or_else(UserId::generate);

        // Upsert: created_at survives overwrites of name and age
        let user = match users.get(id.as_str()) {
            Some(existing) => {
                User::new(id.clone(), input.name, input.age).with_created_at(existing.created_at())
            }
            None => User::new(id.clone(), input.name, input.age),
        };

        users.insert(id.as_str().to_string(), user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(id.as_str()).is_some())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.users.write().await.clear();
        Ok(())
    }
}
