//! Token-specific error types
//!
//! The five kinds below are the complete validation taxonomy; they propagate
//! unmodified from the codec layer through the orchestrator to its caller.

use thiserror::Error;

/// Token validation and revocation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Signature mismatch, tampered token or undecodable compact form
    #[error("Token signature verification failed")]
    InvalidSignature,

    /// Token expiry has passed
    #[error("Token expired")]
    Expired,

    /// Claims do not match the expected shape
    #[error("Invalid token payload")]
    InvalidTokenPayload,

    /// Refresh token has been revoked, or no active record exists for it
    #[error("Refresh token revoked")]
    RevokedRefreshToken,

    /// A revocation marker exists for the refresh token this access token
    /// was minted from
    #[error("Access token revoked")]
    RevokedAccessToken,
}

impl TokenError {
    /// Stable error code for the routing layer
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::InvalidSignature => "INVALID_TOKEN_SIGNATURE",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenPayload => "INVALID_TOKEN_PAYLOAD",
            TokenError::RevokedRefreshToken => "REVOKED_REFRESH_TOKEN",
            TokenError::RevokedAccessToken => "REVOKED_ACCESS_TOKEN",
        }
    }
}
