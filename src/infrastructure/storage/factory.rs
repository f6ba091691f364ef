//! Authoritative store backend selection

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

use super::in_memory::InMemoryUserRepository;
use super::postgres::PostgresUserRepository;

/// Builds the configured storage backend
pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &StorageConfig) -> Result<Arc<dyn UserRepository>, DomainError> {
        match config.backend.as_str() {
            "memory" => Ok(Arc::new(InMemoryUserRepository::new())),
            "postgres" => {
                let url = match &config.database_url {
                    Some(url) => url.clone(),
                    None => std::env::var("DATABASE_URL").map_err(|_| {
                        DomainError::configuration(
                            "Postgres storage selected but no database_url or DATABASE_URL set",
                        )
                    })?,
                };

                let pool = PgPool::connect(&url).await.map_err(|e| {
                    DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e))
                })?;

                let repository = PostgresUserRepository::new(pool);
                repository.ensure_schema().await?;

                Ok(Arc::new(repository))
            }
            other => Err(DomainError::configuration(format!(
                "Unknown storage backend: {}",
                other
            ))),
        }
    }
}
