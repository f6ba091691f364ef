//! In-memory user cache implementation using moka

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::user::{User, UserCache, UserId};
use crate::domain::DomainError;

/// Configuration for the in-memory cache
#[derive(Debug, Clone)]
pub struct InMemoryCacheConfig {
    /// Maximum number of entries before eviction kicks in
    pub max_capacity: u64,
}

impl Default for InMemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

impl InMemoryCacheConfig {
    /// Creates a new configuration with the specified max capacity
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }
}

/// Thread-safe in-memory user cache built on moka
#[derive(Debug)]
pub struct InMemoryUserCache {
    cache: MokaCache<String, User>,
}

impl InMemoryUserCache {
    /// Creates a new cache with default configuration
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    /// Creates a new cache with the given configuration
    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        Self {
            cache: MokaCache::builder().max_capacity(config.max_capacity).build(),
        }
    }
}

impl Default for InMemoryUserCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserCache for InMemoryUserCache {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        // Sync pending tasks so eviction is reflected in the iteration
        self.cache.run_pending_tasks().await;

        let cache = self.cache.clone();
        let users = tokio::task::spawn_blocking(move || {
            cache.iter().map(|(_, user)| user).collect::<Vec<User>>()
        })
        .await
        .map_err(|e| DomainError::cache(format!("Failed to iterate cache: {}", e)))?;

        Ok(users)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.cache.get(id.as_str()).await)
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.cache
            .insert(user.id().as_str().to_string(), user.clone())
            .await;
        Ok(())
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), DomainError> {
        self.cache.remove(id.as_str()).await;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }
}
