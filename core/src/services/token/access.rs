//! Access-token codec.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::token::AccessClaims;
use crate::domain::entities::user::UserSnapshot;
use crate::errors::{DomainResult, TokenError};
use crate::repositories::RevocationCache;

use super::config::TokenConfig;
use super::signer::Signer;

/// Builds and validates access tokens
///
/// Validation consults the revocation cache: an access token is rejected as
/// revoked when a marker exists for the refresh token it was minted from,
/// regardless of its own signature and expiry being fine.
pub struct AccessTokenService<C: RevocationCache> {
    signer: Signer,
    config: TokenConfig,
    revocation: Arc<C>,
}

impl<C: RevocationCache> AccessTokenService<C> {
    pub fn new(signer: Signer, config: TokenConfig, revocation: Arc<C>) -> Self {
        Self {
            signer,
            config,
            revocation,
        }
    }

    /// Issues a new access token tied to a refresh token
    ///
    /// The user's boolean flags are snapshotted into the claims; they are not
    /// re-read on validation.
    pub fn generate(
        &self,
        user_id: Uuid,
        refresh_jti: Uuid,
        snapshot: UserSnapshot,
    ) -> DomainResult<String> {
        let claims = AccessClaims::new(
            user_id,
            refresh_jti,
            snapshot,
            self.config.access_token_ttl_minutes,
        );
        debug!(user_id = %user_id, jti = %claims.jti, "issuing access token");
        self.signer.encode(&claims)
    }

    /// Verifies an access token and returns its claims
    ///
    /// Read-only: signature, expiry, claim shape, then the revocation-marker
    /// lookup on `refresh_jti`.
    pub async fn validate(&self, token: &str) -> DomainResult<AccessClaims> {
        self.signer.verify(token)?;

        let claims: AccessClaims = self.signer.payload(token)?;
        let refresh_jti = claims.refresh_token_id()?;

        if self.revocation.exists(refresh_jti).await? {
            debug!(jti = %claims.jti, refresh_jti = %claims.refresh_jti, "access token rejected, parent refresh token revoked");
            return Err(TokenError::RevokedAccessToken.into());
        }

        Ok(claims)
    }

    /// Parses claims WITHOUT verifying the signature
    ///
    /// Only for call sites where the token was verified in the same
    /// control-flow step; never a substitute for [`validate`](Self::validate).
    pub fn get_payload(&self, token: &str) -> DomainResult<AccessClaims> {
        self.signer.payload(token)
    }
}
