//! Redis cache access for revocation markers.

pub mod redis_client;
pub mod revocation_cache;

pub use redis_client::RedisClient;
pub use revocation_cache::RedisRevocationCache;
