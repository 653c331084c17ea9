//! Postgres implementation of the UserRepository trait.
//!
//! Read-only: user CRUD lives outside this system, the token core only
//! looks users up on refresh to re-snapshot their flags.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use auth_core::domain::entities::user::User;
use auth_core::errors::DomainResult;
use auth_core::repositories::UserRepository;

use crate::InfrastructureError;

/// Postgres-backed user lookup
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new repository over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let query = r#"
            SELECT id, email, is_active, is_superuser, is_verified, created_at
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::Database)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user = User {
            id: row.try_get("id").map_err(InfrastructureError::Database)?,
            email: row.try_get("email").map_err(InfrastructureError::Database)?,
            is_active: row
                .try_get("is_active")
                .map_err(InfrastructureError::Database)?,
            is_superuser: row
                .try_get("is_superuser")
                .map_err(InfrastructureError::Database)?,
            is_verified: row
                .try_get("is_verified")
                .map_err(InfrastructureError::Database)?,
            created_at: row
                .try_get("created_at")
                .map_err(InfrastructureError::Database)?,
        };

        Ok(Some(user))
    }
}
