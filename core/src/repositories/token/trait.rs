//! Durable refresh-token store interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainResult;

/// Repository trait for durable refresh-token records
///
/// Implementations persist one record per issued refresh token and flip
/// `is_revoked` on revocation. Records are never deleted; the store is the
/// audit trail of every session ever issued.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a newly issued refresh-token record
    ///
    /// A failure here must abort token issuance: a refresh token is only
    /// considered issued once its record exists.
    async fn save(&self, record: RefreshTokenRecord) -> DomainResult<()>;

    /// Mark a single record as revoked
    ///
    /// Returns `true` if an active record was revoked, `false` if no such
    /// record existed (already revoked or never issued).
    async fn mark_revoked(&self, jti: Uuid) -> DomainResult<bool>;

    /// Check whether an active (non-revoked) record exists for this id
    async fn exists_active(&self, jti: Uuid) -> DomainResult<bool>;

    /// Atomically mark all of a user's active records as revoked
    ///
    /// Must run as a single statement against the store so that a concurrent
    /// `save` cannot be lost: only records active at query time are revoked
    /// and returned (snapshot semantics).
    async fn bulk_mark_revoked_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Uuid>>;
}
