//! User Service
//!
//! A small CRUD service for user entities backed by a two-tier store:
//! an authoritative repository (in-memory or PostgreSQL) fronted by a
//! cache (in-memory or Redis). Reads prefer the cache and fall back to
//! the store; writes go to the store first and are mirrored to the
//! cache best-effort.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::AppState;
use infrastructure::cache::CacheFactory;
use infrastructure::storage::StorageFactory;
use infrastructure::user::{seed_test_users, CachedUserRepository};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!(
        storage = %config.storage.backend,
        cache = %config.cache.backend,
        "Initializing user store"
    );

    let repository = StorageFactory::create(&config.storage).await?;
    let cache = CacheFactory::create(&config.cache).await?;

    let users = Arc::new(CachedUserRepository::new(repository, cache));

    if config.storage.seed_test_data {
        seed_test_users(&users).await?;
    }

    Ok(AppState::new(users))
}
