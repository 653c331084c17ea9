//! Configuration for the token services

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use auth_shared::config::JwtConfig;

use crate::errors::{DomainError, DomainResult};

/// Signing-key and lifetime configuration shared by both token codecs
///
/// Immutable after construction; every component receives it explicitly, no
/// process-wide singleton is consulted.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HS256 shared secret, or PEM-encoded private key for RS256
    pub secret: String,
    /// PEM-encoded public key, required for asymmetric algorithms
    pub public_key: Option<String>,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes
    pub access_token_ttl_minutes: i64,
    /// Refresh token lifetime in minutes
    pub refresh_token_ttl_minutes: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-change-in-production".to_string(),
            public_key: None,
            algorithm: Algorithm::HS256,
            access_token_ttl_minutes: 15,
            refresh_token_ttl_minutes: 60 * 24 * 2,
        }
    }
}

impl TokenConfig {
    /// Builds a token configuration from the shared JWT settings
    ///
    /// Fails if the algorithm identifier is unknown.
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            DomainError::Internal {
                message: format!("unknown JWT algorithm: {}", config.algorithm),
            }
        })?;

        Ok(Self {
            secret: config.secret.clone(),
            public_key: config.public_key.clone(),
            algorithm,
            access_token_ttl_minutes: config.access_token_ttl_minutes,
            refresh_token_ttl_minutes: config.refresh_token_ttl_minutes,
        })
    }

    /// Access-token lifetime in seconds
    ///
    /// Also the TTL of revocation markers: a marker only needs to outlive the
    /// access tokens minted from the refresh token it revokes.
    pub fn access_ttl_seconds(&self) -> u64 {
        (self.access_token_ttl_minutes.max(0) as u64) * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_jwt_config_parses_algorithm() {
        let jwt = JwtConfig::new("secret");
        let config = TokenConfig::from_jwt_config(&jwt).unwrap();
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_ttl_minutes, 15);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let mut jwt = JwtConfig::new("secret");
        jwt.algorithm = "XX999".to_string();
        assert!(TokenConfig::from_jwt_config(&jwt).is_err());
    }

    #[test]
    fn marker_ttl_tracks_access_lifetime() {
        let config = TokenConfig::default();
        assert_eq!(config.access_ttl_seconds(), 900);
    }
}
