//! Configuration sub-modules
//!
//! - `auth` - JWT signing and token lifetime configuration
//! - `cache` - Redis configuration for the revocation cache
//! - `database` - Postgres connection configuration

pub mod auth;
pub mod cache;
pub mod database;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
