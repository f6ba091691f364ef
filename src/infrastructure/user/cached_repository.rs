//! Two-tier cached user repository
//!
//! Reads prefer the cache and fall back to the authoritative store; writes
//! go to the authoritative store first and are mirrored to the cache only
//! after it succeeds. The cache tier is advisory: any cache failure is
//! logged and absorbed, and never changes the outcome reported to the
//! caller.

use std::sync::Arc;

use tracing::warn;

use crate::domain::user::{User, UserCache, UserId, UserInput, UserRepository};
use crate::domain::DomainError;

/// Repository facade combining a cache tier with the authoritative store
#[derive(Debug, Clone)]
pub struct CachedUserRepository {
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn UserCache>,
}

impl CachedUserRepository {
    /// Create a new facade over the given tiers
    pub fn new(repository: Arc<dyn UserRepository>, cache: Arc<dyn UserCache>) -> Self {
        Self { repository, cache }
    }

    /// List every user
    ///
    /// The cache is consulted first; an empty cache is indistinguishable
    /// from one that was never populated (or was flushed), so zero cached
    /// entries means a full fallthrough to the authoritative store rather
    /// than an incomplete view. This read path does not repopulate the
    /// cache.
    pub async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        match self.cache.find_all().await {
            Ok(cached) if !cached.is_empty() => return Ok(cached),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "cache unavailable for find_all, falling back"),
        }

        self.repository.find_all().await
    }

    /// Get a user by id, preferring the cache
    ///
    /// A miss queries the authoritative store without backfilling the
    /// cache; the cache is populated by writes only.
    pub async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        match self.cache.find_by_id(id).await {
            Ok(Some(user)) => return Ok(Some(user)),
            Ok(None) => {}
            Err(e) => warn!(user_id = %id, error = %e, "cache lookup failed, falling back"),
        }

        self.repository.find_by_id(id).await
    }

    /// Persist a user, write-through
    ///
    /// The authoritative save is the success criterion. The cache write
    /// runs only after it succeeds and is best-effort.
    pub async fn save(&self, input: UserInput) -> Result<User, DomainError> {
        let saved = self.repository.save(input).await?;

        if let Err(e) = self.cache.save(&saved).await {
            warn!(user_id = %saved.id(), error = %e, "cache write failed after save");
        }

        Ok(saved)
    }

    /// Delete a user by id, returning whether it existed in the
    /// authoritative store
    ///
    /// The cache key is removed best-effort once the authoritative
    /// deletion completes; a key absent from the cache is not an error.
    pub async fn delete_by_id(&self, id: &UserId) -> Result<bool, DomainError> {
        let deleted = self.repository.delete_by_id(id).await?;

        if let Err(e) = self.cache.delete_by_id(id).await {
            warn!(user_id = %id, error = %e, "cache delete failed after delete_by_id");
        }

        Ok(deleted)
    }

    /// Delete every user, then clear the cache in full
    pub async fn delete_all(&self) -> Result<(), DomainError> {
        self.repository.delete_all().await?;

        if let Err(e) = self.cache.delete_all().await {
            warn!(error = %e, "cache clear failed after delete_all");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::repository::mock::{MockUserCache, MockUserRepository};

    fn create_store() -> (
        CachedUserRepository,
        Arc<MockUserRepository>,
        Arc<MockUserCache>,
    ) {
        let repository = Arc::new(MockUserRepository::new());
        let cache = Arc::new(MockUserCache::new());
        let store = CachedUserRepository::new(repository.clone(), cache.clone());
        (store, repository, cache)
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_created_at() {
        let (store, _, _) = create_store();

        let user = store
            .save(UserInput::new().with_name("Eun").with_age(31))
            .await
            .unwrap();

        assert!(!user.id().as_str().is_empty());
        assert_eq!(user.name(), Some("Eun"));
        assert_eq!(user.age(), Some(31));
    }

    #[tokio::test]
    async fn test_resave_preserves_created_at() {
        let (store, _, _) = create_store();

        let first = store
            .save(UserInput::new().with_name("Eun").with_age(31))
            .await
            .unwrap();

        let second = store.save(UserInput::from(&first)).await.unwrap();

        assert_eq!(second.id(), first.id());
        assert_eq!(second.created_at(), first.created_at());
    }

    #[tokio::test]
    async fn test_save_writes_through_to_cache() {
        let (store, _, cache) = create_store();

        let user = store
            .save(UserInput::new().with_name("Joe").with_age(29))
            .await
            .unwrap();

        let cached = cache.find_by_id(user.id()).await.unwrap();
        assert_eq!(cached, Some(user));
    }

    #[tokio::test]
    async fn test_cache_write_failure_does_not_fail_save() {
        let (store, repository, cache) = create_store();
        cache.set_error("Redis unavailable").await;

        let user = store
            .save(UserInput::new().with_name("Sua").with_age(4))
            .await
            .unwrap();

        // Authoritative store committed even though the cache tier failed
        let stored = repository.find_by_id(user.id()).await.unwrap();
        assert_eq!(stored, Some(user));
    }

    #[tokio::test]
    async fn test_authoritative_failure_propagates() {
        let (store, repository, cache) = create_store();
        repository.set_should_fail(true).await;

        let result = store.save(UserInput::new().with_name("Eun")).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));

        // Write-through ordering: nothing reached the cache
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_find_by_id_cache_hit() {
        let (store, repository, _) = create_store();

        let user = store
            .save(UserInput::new().with_name("Eun").with_age(31))
            .await
            .unwrap();

        // Remove from the authoritative store to prove the hit path
        repository.delete_by_id(user.id()).await.unwrap();

        let found = store.find_by_id(user.id()).await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_find_by_id_cache_miss_falls_back() {
        let (store, _, cache) = create_store();

        let user = store
            .save(UserInput::new().with_name("Joe").with_age(29))
            .await
            .unwrap();

        // Simulate a cache flush
        cache.delete_all().await.unwrap();

        let found = store.find_by_id(user.id()).await.unwrap();
        assert_eq!(found, Some(user));

        // Read misses do not backfill the cache
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_find_by_id_agreement_between_paths() {
        let (store, _, cache) = create_store();

        let user = store
            .save(UserInput::new().with_name("Eun").with_age(31))
            .await
            .unwrap();

        let via_cache = store.find_by_id(user.id()).await.unwrap();

        cache.delete_all().await.unwrap();
        let via_store = store.find_by_id(user.id()).await.unwrap();

        assert_eq!(via_cache, via_store);
    }

    #[tokio::test]
    async fn test_find_by_id_nonexistent() {
        let (store, _, _) = create_store();

        let id = UserId::new("nonexistent-id").unwrap();
        let found = store.find_by_id(&id).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_cache_error_falls_back() {
        let (store, _, cache) = create_store();

        let user = store
            .save(UserInput::new().with_name("Joe").with_age(29))
            .await
            .unwrap();

        cache.set_error("Redis unavailable").await;

        let found = store.find_by_id(user.id()).await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_find_all_empty_cache_falls_back() {
        let (store, _, cache) = create_store();

        store.save(UserInput::new().with_name("Eun").with_age(31)).await.unwrap();
        store.save(UserInput::new().with_name("Joe").with_age(29)).await.unwrap();
        store.save(UserInput::new().with_name("Sua").with_age(4)).await.unwrap();

        // A flushed cache must not produce an incomplete view
        cache.delete_all().await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 3);

        let mut names: Vec<_> = all.iter().filter_map(|u| u.name()).collect();
        names.sort_unstable();
        assert_eq!(names, ["Eun", "Joe", "Sua"]);
    }

    #[tokio::test]
    async fn test_find_all_prefers_populated_cache() {
        let (store, repository, _) = create_store();

        let user = store
            .save(UserInput::new().with_name("Eun").with_age(31))
            .await
            .unwrap();

        repository.delete_by_id(user.id()).await.unwrap();

        // Cache still enumerates the entry, so it wins
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_cache_error_falls_back() {
        let (store, _, cache) = create_store();

        store.save(UserInput::new().with_name("Eun").with_age(31)).await.unwrap();
        cache.set_error("Redis unavailable").await;

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_by_id_removes_both_tiers() {
        let (store, _, cache) = create_store();

        let user = store
            .save(UserInput::new().with_name("Eun").with_age(31))
            .await
            .unwrap();

        let deleted = store.delete_by_id(user.id()).await.unwrap();
        assert!(deleted);

        assert!(store.find_by_id(user.id()).await.unwrap().is_none());
        assert!(cache.find_by_id(user.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id_nonexistent() {
        let (store, _, _) = create_store();

        let id = UserId::new("nonexistent-id").unwrap();
        let deleted = store.delete_by_id(&id).await.unwrap();

        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_delete_cache_failure_does_not_fail_delete() {
        let (store, _, cache) = create_store();

        let user = store
            .save(UserInput::new().with_name("Eun").with_age(31))
            .await
            .unwrap();

        cache.set_error("Redis unavailable").await;

        let deleted = store.delete_by_id(user.id()).await.unwrap();
        assert!(deleted);
    }

    #[tokio::test]
    async fn test_delete_all_empties_both_tiers() {
        let (store, _, cache) = create_store();

        store.save(UserInput::new().with_name("Eun").with_age(31)).await.unwrap();
        store.save(UserInput::new().with_name("Joe").with_age(29)).await.unwrap();

        store.delete_all().await.unwrap();

        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_overwrite_scenario() {
        let (store, _, _) = create_store();
        let id = UserId::new("X").unwrap();

        let first = store
            .save(UserInput::new().with_id(id.clone()).with_name("A").with_age(1))
            .await
            .unwrap();

        store
            .save(UserInput::new().with_id(id.clone()).with_name("B").with_age(2))
            .await
            .unwrap();

        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name(), Some("B"));
        assert_eq!(found.age(), Some(2));
        assert_eq!(found.created_at(), first.created_at());
    }
}
