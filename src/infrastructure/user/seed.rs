//! Startup test data seeding

use tracing::info;

use crate::domain::user::UserInput;
use crate::domain::DomainError;

use super::cached_repository::CachedUserRepository;

/// Wipes the store and inserts a small set of demo users.
///
/// Intended for local development and demos, enabled via the
/// `storage.seed_test_data` configuration flag.
pub async fn seed_test_users(repository: &CachedUserRepository) -> Result<(), DomainError> {
    info!("Start test data initialization");

    repository.delete_all().await?;

    repository
        .save(UserInput::new().with_name("Eun").with_age(31))
        .await?;
    repository
        .save(UserInput::new().with_name("Joe").with_age(29))
        .await?;
    repository
        .save(UserInput::new().with_name("Sua").with_age(4))
        .await?;

    info!("Done test data initialization");

    Ok(())
}
