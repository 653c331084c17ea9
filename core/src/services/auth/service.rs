//! Session orchestrator composing the token codecs.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::{User, UserSnapshot};
use crate::domain::value_objects::TokenPair;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{RevocationCache, TokenRepository, UserRepository};
use crate::services::token::{AccessTokenService, RefreshTokenService, Signer, TokenConfig};

/// Orchestrates login, refresh, logout and access checks
///
/// The only component exposed to the request layer. Every token error from
/// the codecs propagates unmodified; this service recovers from none of them.
pub struct AuthService<U, R, C>
where
    U: UserRepository,
    R: TokenRepository,
    C: RevocationCache,
{
    user_repository: Arc<U>,
    access_tokens: AccessTokenService<C>,
    refresh_tokens: RefreshTokenService<R, C>,
    config: TokenConfig,
}

impl<U, R, C> AuthService<U, R, C>
where
    U: UserRepository,
    R: TokenRepository,
    C: RevocationCache,
{
    /// Create a new auth service
    ///
    /// Builds one signer from the configuration and hands it to both codecs;
    /// key material is loaded here, once, and never reloaded.
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<R>,
        revocation_cache: Arc<C>,
        config: TokenConfig,
    ) -> DomainResult<Self> {
        let signer = Signer::new(&config)?;
        let access_tokens = AccessTokenService::new(
            signer.clone(),
            config.clone(),
            Arc::clone(&revocation_cache),
        );
        let refresh_tokens = RefreshTokenService::new(
            signer,
            config.clone(),
            token_repository,
            revocation_cache,
        );

        Ok(Self {
            user_repository,
            access_tokens,
            refresh_tokens,
            config,
        })
    }

    /// Issues a fresh refresh/access pair for an authenticated user
    pub async fn login(&self, user: &User) -> DomainResult<TokenPair> {
        let refresh_token = self.refresh_tokens.generate(user.id).await?;

        // Unverified parse is safe here: the token was minted one line above.
        let refresh_claims = self.refresh_tokens.get_payload(&refresh_token)?;
        let access_token = self.access_tokens.generate(
            user.id,
            refresh_claims.token_id()?,
            UserSnapshot::from(user),
        )?;

        info!(user_id = %user.id, "session issued");
        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_ttl_minutes,
            self.config.refresh_token_ttl_minutes,
        ))
    }

    /// Rotates a refresh token: validates it, revokes it, issues a new pair
    ///
    /// The old token is revoked before any new token exists, which is what
    /// makes a refresh token single-use. Any failure aborts the rotation with
    /// nothing issued.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.refresh_tokens.validate(refresh_token).await?;
        let jti = claims.token_id()?;

        self.refresh_tokens.revoke(jti).await?;

        let user_id = claims.subject()?;
        let user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("user {user_id}"),
            })?;

        self.login(&user).await
    }

    /// Validates an access token; no state change
    pub async fn check_access(&self, access_token: &str) -> DomainResult<()> {
        self.access_tokens.validate(access_token).await.map(|_| ())
    }

    /// Ends the session behind an access token
    ///
    /// The access token must itself be currently valid; an expired or revoked
    /// token cannot request a logout. Its parent refresh token is revoked,
    /// which also invalidates this and every sibling access token.
    pub async fn logout(&self, access_token: &str) -> DomainResult<()> {
        let claims = self.access_tokens.validate(access_token).await?;
        let refresh_jti = claims.refresh_token_id()?;

        self.refresh_tokens.revoke(refresh_jti).await?;

        info!(user_id = %claims.sub, "session ended");
        Ok(())
    }

    /// Ends every session of the user behind an access token
    ///
    /// Returns the number of refresh tokens revoked. Logins racing this call
    /// are not affected (snapshot semantics in the durable store).
    pub async fn logout_all(&self, access_token: &str) -> DomainResult<usize> {
        let claims = self.access_tokens.validate(access_token).await?;
        let user_id = claims.subject()?;

        let revoked = self.refresh_tokens.revoke_all_for_user(user_id).await?;

        info!(user_id = %user_id, count = revoked.len(), "all sessions ended");
        Ok(revoked.len())
    }
}
