//! Cache backend selection

use std::sync::Arc;

use crate::config::CacheConfig;
use crate::domain::user::UserCache;
use crate::domain::DomainError;

use super::in_memory::{InMemoryCacheConfig, InMemoryUserCache};
use super::redis::RedisUserCache;

/// Builds the configured cache backend
pub struct CacheFactory;

impl CacheFactory {
    pub async fn create(config: &CacheConfig) -> Result<Arc<dyn UserCache>, DomainError> {
        match config.backend.as_str() {
            "memory" => {
                let cache_config =
                    InMemoryCacheConfig::default().with_max_capacity(config.max_capacity);

                Ok(Arc::new(InMemoryUserCache::with_config(cache_config)))
            }
            "redis" => {
                let url = match &config.redis_url {
                    Some(url) => url.clone(),
                    None => std::env::var("REDIS_URL").map_err(|_| {
                        DomainError::configuration(
                            "Redis cache selected but no redis_url or REDIS_URL set",
                        )
                    })?,
                };

                let cache =
                    RedisUserCache::connect_with_prefix(&url, config.key_prefix.as_deref())
                        .await?;

                Ok(Arc::new(cache))
            }
            other => Err(DomainError::configuration(format!(
                "Unknown cache backend: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_memory_cache() {
        let config = CacheConfig::default();

        let cache = CacheFactory::create(&config).await;
        assert!(cache.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let config = CacheConfig {
            backend: "memcached".to_string(),
            ..CacheConfig::default()
        };

        let result = CacheFactory::create(&config).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
