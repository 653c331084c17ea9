//! Token entities for JWT-based session handling.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::UserSnapshot;
use crate::errors::TokenError;

/// Claims carried by a refresh token
///
/// Invariant: `exp > iat`. The `jti` doubles as the primary key of the
/// durable [`RefreshTokenRecord`] written at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Unique token id
    pub jti: String,

    /// Subject (user id)
    pub sub: String,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl RefreshClaims {
    /// Builds the claims matching a durable refresh-token record
    pub fn from_record(record: &RefreshTokenRecord) -> Self {
        Self {
            jti: record.id.to_string(),
            sub: record.user_id.to_string(),
            iat: record.issued_at.timestamp(),
            exp: record.expires_at.timestamp(),
        }
    }

    /// Token id as a UUID
    pub fn token_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.jti).map_err(|_| TokenError::InvalidTokenPayload)
    }

    /// Subject as a UUID
    pub fn subject(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidTokenPayload)
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims carried by an access token
///
/// Besides the base claims, an access token records the `jti` of the refresh
/// token that produced it and a snapshot of the user's boolean flags taken at
/// issuance. The snapshot is deliberately stale: it is not re-read from the
/// user store on validation and only refreshes on the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Unique token id
    pub jti: String,

    /// Subject (user id)
    pub sub: String,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,

    /// Id of the refresh token this access token was minted from
    pub refresh_jti: String,

    /// Snapshot: account enabled at issuance
    pub is_active: bool,

    /// Snapshot: account verified at issuance
    pub is_verified: bool,

    /// Snapshot: superuser at issuance
    pub is_superuser: bool,
}

impl AccessClaims {
    /// Creates claims for a new access token
    pub fn new(
        user_id: Uuid,
        refresh_jti: Uuid,
        snapshot: UserSnapshot,
        ttl_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            jti: Uuid::new_v4().to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            refresh_jti: refresh_jti.to_string(),
            is_active: snapshot.is_active,
            is_verified: snapshot.is_verified,
            is_superuser: snapshot.is_superuser,
        }
    }

    /// Subject as a UUID
    pub fn subject(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidTokenPayload)
    }

    /// Parent refresh token id as a UUID
    pub fn refresh_token_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.refresh_jti).map_err(|_| TokenError::InvalidTokenPayload)
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Durable refresh-token record
///
/// Created when a refresh token is issued and flipped to revoked on logout or
/// rotation. Records are never physically deleted; they form the audit trail
/// of issued sessions. Written exclusively by the refresh token service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Record id, identical to the token's `jti`
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// Whether the token has been revoked
    pub is_revoked: bool,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a new active record with a fresh id
    pub fn new(user_id: Uuid, ttl_minutes: i64) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            is_revoked: false,
            issued_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
        }
    }

    /// Checks whether the record has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// A record is active if it is neither revoked nor expired
    pub fn is_active(&self) -> bool {
        !self.is_revoked && !self.is_expired()
    }

    /// Revokes the record
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> UserSnapshot {
        UserSnapshot {
            is_active: true,
            is_verified: false,
            is_superuser: false,
        }
    }

    #[test]
    fn refresh_claims_mirror_record() {
        let user_id = Uuid::new_v4();
        let record = RefreshTokenRecord::new(user_id, 2880);
        let claims = RefreshClaims::from_record(&record);

        assert_eq!(claims.token_id().unwrap(), record.id);
        assert_eq!(claims.subject().unwrap(), user_id);
        assert_eq!(claims.iat, record.issued_at.timestamp());
        assert_eq!(claims.exp, record.expires_at.timestamp());
        assert!(claims.exp > claims.iat);
        assert!(!claims.is_expired());
    }

    #[test]
    fn access_claims_embed_snapshot_and_parent_jti() {
        let user_id = Uuid::new_v4();
        let refresh_jti = Uuid::new_v4();
        let claims = AccessClaims::new(user_id, refresh_jti, snapshot(), 15);

        assert_eq!(claims.subject().unwrap(), user_id);
        assert_eq!(claims.refresh_token_id().unwrap(), refresh_jti);
        assert!(claims.is_active);
        assert!(!claims.is_verified);
        assert!(!claims.is_superuser);
        assert!(claims.exp > claims.iat);
        assert!(!claims.is_expired());
    }

    #[test]
    fn access_claims_get_distinct_jtis() {
        let user_id = Uuid::new_v4();
        let refresh_jti = Uuid::new_v4();
        let a = AccessClaims::new(user_id, refresh_jti, snapshot(), 15);
        let b = AccessClaims::new(user_id, refresh_jti, snapshot(), 15);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn malformed_subject_is_a_payload_error() {
        let mut claims = RefreshClaims::from_record(&RefreshTokenRecord::new(Uuid::new_v4(), 10));
        claims.sub = "not-a-uuid".to_string();
        assert_eq!(claims.subject(), Err(TokenError::InvalidTokenPayload));
    }

    #[test]
    fn record_lifecycle() {
        let mut record = RefreshTokenRecord::new(Uuid::new_v4(), 2880);
        assert!(record.is_active());

        record.revoke();
        assert!(record.is_revoked);
        assert!(!record.is_active());
    }

    #[test]
    fn expired_record_is_not_active() {
        let mut record = RefreshTokenRecord::new(Uuid::new_v4(), 2880);
        record.expires_at = Utc::now() - Duration::days(1);
        assert!(record.is_expired());
        assert!(!record.is_active());
    }

    #[test]
    fn claims_survive_serialization() {
        let claims = AccessClaims::new(Uuid::new_v4(), Uuid::new_v4(), snapshot(), 15);
        let json = serde_json::to_string(&claims).unwrap();
        let back: AccessClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(claims, back);
    }

    #[test]
    fn refresh_token_parsed_as_access_claims_is_rejected() {
        let record = RefreshTokenRecord::new(Uuid::new_v4(), 2880);
        let refresh = RefreshClaims::from_record(&record);
        let json = serde_json::to_string(&refresh).unwrap();
        // missing refresh_jti and snapshot fields
        assert!(serde_json::from_str::<AccessClaims>(&json).is_err());
    }
}
