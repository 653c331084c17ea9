//! Redis-backed revocation-marker store.
//!
//! A marker under `revoked_refresh:{jti}` means the refresh token with that
//! id, and every access token minted from it, must be rejected. Marker TTL
//! equals the access-token lifetime, so a marker outlives every access token
//! it has to block and then lapses on its own.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use auth_core::errors::DomainResult;
use auth_core::repositories::RevocationCache;

use super::redis_client::RedisClient;

/// Key namespace for revocation markers
const KEY_PREFIX: &str = "revoked_refresh";

/// Marker payload; only the key's presence carries meaning
const MARKER_VALUE: &str = "1";

/// Redis implementation of the revocation-marker cache
#[derive(Clone)]
pub struct RedisRevocationCache {
    client: RedisClient,
}

impl RedisRevocationCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn marker_key(&self, jti: Uuid) -> String {
        self.client.make_key(&format!("{}:{}", KEY_PREFIX, jti))
    }
}

#[async_trait]
impl RevocationCache for RedisRevocationCache {
    async fn set(&self, jti: Uuid, ttl_seconds: u64) -> DomainResult<()> {
        self.client
            .set_with_expiry(&self.marker_key(jti), MARKER_VALUE, ttl_seconds)
            .await?;

        debug!(%jti, ttl_seconds, "revocation marker written");
        Ok(())
    }

    async fn bulk_set(&self, jtis: &[Uuid], ttl_seconds: u64) -> DomainResult<()> {
        let keys: Vec<String> = jtis.iter().map(|jti| self.marker_key(*jti)).collect();

        self.client
            .bulk_set_with_expiry(&keys, MARKER_VALUE, ttl_seconds)
            .await?;

        debug!(count = jtis.len(), ttl_seconds, "revocation markers written");
        Ok(())
    }

    async fn exists(&self, jti: Uuid) -> DomainResult<bool> {
        Ok(self.client.exists(&self.marker_key(jti)).await?)
    }
}
