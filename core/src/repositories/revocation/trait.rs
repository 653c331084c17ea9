//! Expiring revocation-marker cache interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainResult;

/// Capability trait for the expiring revocation cache
///
/// A marker's mere presence signals that the refresh token with that `jti`,
/// and every access token minted from it, must be rejected. Markers carry a
/// TTL equal to the access-token lifetime: once every derived access token
/// has expired on its own, the marker is no longer needed and lapses.
#[async_trait]
pub trait RevocationCache: Send + Sync {
    /// Write a revocation marker for one refresh-token id
    async fn set(&self, jti: Uuid, ttl_seconds: u64) -> DomainResult<()>;

    /// Write revocation markers for a batch of refresh-token ids
    async fn bulk_set(&self, jtis: &[Uuid], ttl_seconds: u64) -> DomainResult<()>;

    /// Check whether a marker exists for this refresh-token id
    async fn exists(&self, jti: Uuid) -> DomainResult<bool>;
}
