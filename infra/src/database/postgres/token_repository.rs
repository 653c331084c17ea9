//! Postgres implementation of the TokenRepository trait.
//!
//! One row per issued refresh token, keyed by the token's `jti`. Rows are
//! flipped to revoked, never deleted; the table doubles as the audit trail
//! of every session ever issued.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use auth_core::domain::entities::token::RefreshTokenRecord;
use auth_core::errors::DomainResult;
use auth_core::repositories::TokenRepository;

use crate::InfrastructureError;

/// Postgres-backed refresh-token store
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new repository over an existing connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn save(&self, record: RefreshTokenRecord) -> DomainResult<()> {
        let query = r#"
            INSERT INTO refresh_tokens (id, user_id, is_revoked, issued_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
        "#;

        sqlx::query(query)
            .bind(record.id)
            .bind(record.user_id)
            .bind(record.is_revoked)
            .bind(record.issued_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::Database)?;

        debug!(jti = %record.id, "refresh token record saved");
        Ok(())
    }

    async fn mark_revoked(&self, jti: Uuid) -> DomainResult<bool> {
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE id = $1 AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(jti)
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::Database)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_active(&self, jti: Uuid) -> DomainResult<bool> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM refresh_tokens
                WHERE id = $1 AND is_revoked = FALSE AND expires_at > $2
            )
        "#;

        let exists: bool = sqlx::query_scalar(query)
            .bind(jti)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(InfrastructureError::Database)?;

        Ok(exists)
    }

    async fn bulk_mark_revoked_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Uuid>> {
        // Single statement: rows inserted after it starts are untouched.
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE user_id = $1 AND is_revoked = FALSE AND expires_at > $2
            RETURNING id
        "#;

        let jtis: Vec<Uuid> = sqlx::query_scalar(query)
            .bind(user_id)
            .bind(Utc::now())
            .fetch_all(&self.pool)
            .await
            .map_err(InfrastructureError::Database)?;

        debug!(user_id = %user_id, count = jtis.len(), "refresh token records bulk revoked");
        Ok(jtis)
    }
}
