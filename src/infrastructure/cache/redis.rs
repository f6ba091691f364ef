//! Redis-backed user cache implementation

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::collections::HashMap;
use std::fmt;

use crate::domain::user::{User, UserCache, UserId};
use crate::domain::DomainError;

/// Name of the Redis hash holding all cached users
const USERS_HASH: &str = "users";

/// Redis implementation of UserCache
///
/// All users live in a single hash keyed by user id, so listing the
/// cache is one HGETALL rather than a SCAN over the keyspace.
#[derive(Clone)]
pub struct RedisUserCache {
    connection: ConnectionManager,
    hash_key: String,
}

impl fmt::Debug for RedisUserCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisUserCache")
            .field("hash_key", &self.hash_key)
            .finish()
    }
}

impl RedisUserCache {
    /// Connect to Redis at the given URL
    pub async fn connect(url: &str) -> Result<Self, DomainError> {
        Self::connect_with_prefix(url, None).await
    }

    /// Connect to Redis, namespacing the hash under an optional prefix
    pub async fn connect_with_prefix(
        url: &str,
        key_prefix: Option<&str>,
    ) -> Result<Self, DomainError> {
        let client = redis::Client::open(url)
            .map_err(|e| DomainError::cache(format!("Invalid Redis URL: {}", e)))?;

        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| DomainError::cache(format!("Failed to connect to Redis: {}", e)))?;

        let hash_key = match key_prefix {
            Some(prefix) => format!("{}:{}", prefix, USERS_HASH),
            None => USERS_HASH.to_string(),
        };

        Ok(Self {
            connection,
            hash_key,
        })
    }

    fn serialize(user: &User) -> Result<String, DomainError> {
        serde_json::to_string(user)
            .map_err(|e| DomainError::cache(format!("Failed to serialize user: {}", e)))
    }

    fn deserialize(raw: &str) -> Result<User, DomainError> {
        serde_json::from_str(raw)
            .map_err(|e| DomainError::cache(format!("Failed to deserialize cached user: {}", e)))
    }
}

#[async_trait]
impl UserCache for RedisUserCache {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let mut conn = self.connection.clone();

        let entries: HashMap<String, String> = conn
            .hgetall(&self.hash_key)
            .await
            .map_err(|e| DomainError::cache(format!("Failed to list cached users: {}", e)))?;

        let mut users = Vec::with_capacity(entries.len());

        for raw in entries.values() {
            users.push(Self::deserialize(raw)?);
        }

        Ok(users)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let mut conn = self.connection.clone();

        let raw: Option<String> = conn
            .hget(&self.hash_key, id.as_str())
            .await
            .map_err(|e| DomainError::cache(format!("Failed to get cached user: {}", e)))?;

        match raw {
            Some(raw) => Ok(Some(Self::deserialize(&raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();
        let raw = Self::serialize(user)?;

        conn.hset::<_, _, _, ()>(&self.hash_key, user.id().as_str(), raw)
            .await
            .map_err(|e| DomainError::cache(format!("Failed to cache user: {}", e)))?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();

        conn.hdel::<_, _, ()>(&self.hash_key, id.as_str())
            .await
            .map_err(|e| DomainError::cache(format!("Failed to evict cached user: {}", e)))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();

        conn.del::<_, ()>(&self.hash_key)
            .await
            .map_err(|e| DomainError::cache(format!("Failed to clear user cache: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests require a running Redis instance reachable via
    // REDIS_URL. Run with: cargo test -- --ignored

    async fn connect() -> RedisUserCache {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let cache = RedisUserCache::connect_with_prefix(&url, Some("user-service-test"))
            .await
            .unwrap();
        cache.delete_all().await.unwrap();
        cache
    }

    fn test_user(id: &str, name: &str, age: i32) -> User {
        User::new(UserId::new(id).unwrap(), Some(name.to_string()), Some(age))
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_redis_save_and_find() {
        let cache = connect().await;
        let user = test_user("user-1", "Eun", 31);

        cache.save(&user).await.unwrap();

        let found = cache.find_by_id(user.id()).await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_redis_find_all_and_delete_all() {
        let cache = connect().await;

        cache.save(&test_user("a", "Eun", 31)).await.unwrap();
        cache.save(&test_user("b", "Joe", 29)).await.unwrap();

        assert_eq!(cache.find_all().await.unwrap().len(), 2);

        cache.delete_all().await.unwrap();
        assert!(cache.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_redis_delete_by_id() {
        let cache = connect().await;
        let user = test_user("user-1", "Eun", 31);

        cache.save(&user).await.unwrap();
        cache.delete_by_id(user.id()).await.unwrap();

        assert!(cache.find_by_id(user.id()).await.unwrap().is_none());
    }
}
