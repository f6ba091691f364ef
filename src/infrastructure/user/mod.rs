mod cached_repository;
mod seed;

pub use cached_repository::CachedUserRepository;
pub use seed::seed_test_users;
