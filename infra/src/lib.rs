//! # Infrastructure Layer
//!
//! Concrete backends for the token lifecycle core: the durable refresh-token
//! store on Postgres (SQLx) and the expiring revocation-marker cache on Redis.
//!
//! The core never sees these types directly; it talks to the repository and
//! cache traits, and everything here converts its own failures into the
//! core's storage errors at the boundary.

use auth_core::errors::DomainError;

/// Database module - Postgres implementations using SQLx
pub mod database;

/// Cache module - Redis client and the revocation-marker store
pub mod cache;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Storage {
            message: err.to_string(),
        }
    }
}

/// Load backend configuration from the environment
///
/// Reads `.env` if present, then `DATABASE_URL` and `REDIS_URL` with their
/// tuning knobs via the shared config loaders.
pub fn load_config() -> (auth_shared::DatabaseConfig, auth_shared::CacheConfig) {
    dotenvy::dotenv().ok();

    (
        auth_shared::DatabaseConfig::from_env(),
        auth_shared::CacheConfig::from_env(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_errors_become_storage_errors() {
        let err = InfrastructureError::Config("bad url".to_string());
        let domain: DomainError = err.into();
        assert!(matches!(domain, DomainError::Storage { .. }));
        assert_eq!(domain.error_code(), "STORAGE_ERROR");
    }
}
