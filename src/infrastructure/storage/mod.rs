mod factory;
mod in_memory;
mod postgres;

pub use factory::StorageFactory;
pub use in_memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;
