//! Postgres implementations of the core repository traits.

mod token_repository;
mod user_repository;

pub use token_repository::PgTokenRepository;
pub use user_repository::PgUserRepository;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use auth_shared::DatabaseConfig;

use crate::InfrastructureError;

/// Create a connection pool from the database configuration
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, InfrastructureError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout))
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}
