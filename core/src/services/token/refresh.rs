//! Refresh-token codec and revocation bookkeeping.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{RefreshClaims, RefreshTokenRecord};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::{RevocationCache, TokenRepository};

use super::config::TokenConfig;
use super::signer::Signer;

/// Attempts for the best-effort bulk marker write, first try included
const MARKER_WRITE_ATTEMPTS: u32 = 3;

/// Base delay between marker write attempts
const MARKER_RETRY_DELAY_MS: u64 = 100;

/// Builds, validates and revokes refresh tokens
///
/// Owns the durable store: every issued refresh token has a record there,
/// and revocation flips the record before a marker is placed in the cache.
pub struct RefreshTokenService<R: TokenRepository, C: RevocationCache> {
    signer: Signer,
    config: TokenConfig,
    repository: Arc<R>,
    revocation: Arc<C>,
}

impl<R: TokenRepository, C: RevocationCache> RefreshTokenService<R, C> {
    pub fn new(
        signer: Signer,
        config: TokenConfig,
        repository: Arc<R>,
        revocation: Arc<C>,
    ) -> Self {
        Self {
            signer,
            config,
            repository,
            revocation,
        }
    }

    /// Issues a new refresh token for a user
    ///
    /// The durable record is written before the token is returned; a storage
    /// failure propagates and no token is considered issued.
    pub async fn generate(&self, user_id: Uuid) -> DomainResult<String> {
        let record = RefreshTokenRecord::new(user_id, self.config.refresh_token_ttl_minutes);
        let claims = RefreshClaims::from_record(&record);
        let token = self.signer.encode(&claims)?;

        debug!(user_id = %user_id, jti = %record.id, "issuing refresh token");
        self.repository.save(record).await?;

        Ok(token)
    }

    /// Verifies a refresh token and returns its claims
    ///
    /// After signature and expiry, the durable store must hold an active
    /// record for the token's `jti`. A missing record is treated exactly like
    /// an explicit revocation, so a lost record can never widen access.
    pub async fn validate(&self, token: &str) -> DomainResult<RefreshClaims> {
        self.signer.verify(token)?;

        let claims: RefreshClaims = self.signer.payload(token)?;
        let jti = claims.token_id()?;

        if !self.repository.exists_active(jti).await? {
            debug!(jti = %claims.jti, "refresh token rejected, no active record");
            return Err(TokenError::RevokedRefreshToken.into());
        }

        Ok(claims)
    }

    /// Revokes a single refresh token
    ///
    /// Marks the durable record, then writes a revocation marker whose TTL
    /// equals the access-token lifetime. Both writes fail loudly: a token
    /// believed revoked but not recorded would be a security defect.
    pub async fn revoke(&self, jti: Uuid) -> DomainResult<()> {
        let revoked = self.repository.mark_revoked(jti).await?;
        if !revoked {
            debug!(%jti, "revoke on a jti with no active record");
        }

        self.revocation
            .set(jti, self.config.access_ttl_seconds())
            .await?;

        debug!(%jti, "refresh token revoked");
        Ok(())
    }

    /// Revokes every active refresh token of a user
    ///
    /// Phase one is a single atomic statement against the durable store and
    /// returns the affected ids; tokens inserted concurrently are untouched.
    /// Phase two bulk-writes the markers and is best-effort with retries: if
    /// it keeps failing, the refresh tokens are still correctly revoked and
    /// the derived access tokens merely live out their own bounded expiry.
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> DomainResult<Vec<Uuid>> {
        let jtis = self.repository.bulk_mark_revoked_by_user(user_id).await?;
        if jtis.is_empty() {
            return Ok(jtis);
        }

        let ttl = self.config.access_ttl_seconds();
        let mut delay = MARKER_RETRY_DELAY_MS;

        for attempt in 1..=MARKER_WRITE_ATTEMPTS {
            match self.revocation.bulk_set(&jtis, ttl).await {
                Ok(()) => {
                    debug!(user_id = %user_id, count = jtis.len(), "sessions revoked");
                    return Ok(jtis);
                }
                Err(err) if attempt < MARKER_WRITE_ATTEMPTS => {
                    warn!(
                        user_id = %user_id,
                        attempt,
                        error = %err,
                        "revocation marker bulk write failed, retrying"
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay *= 2;
                }
                Err(err) => {
                    warn!(
                        user_id = %user_id,
                        error = %err,
                        "revocation markers not written; derived access tokens remain valid until their own expiry"
                    );
                }
            }
        }

        Ok(jtis)
    }

    /// Parses claims WITHOUT verifying the signature
    ///
    /// Restricted to call sites that just minted or verified the token.
    pub fn get_payload(&self, token: &str) -> DomainResult<RefreshClaims> {
        self.signer.payload(token)
    }
}
