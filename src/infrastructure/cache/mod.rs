mod factory;
mod in_memory;
mod redis;

pub use factory::CacheFactory;
pub use in_memory::{InMemoryCacheConfig, InMemoryUserCache};
pub use redis::RedisUserCache;
