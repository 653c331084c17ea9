//! JWT signing and token lifetime configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// Loaded once at process start. The signing secret holds either the HS256
/// shared secret or, for asymmetric algorithms, the PEM-encoded private key;
/// in the latter case `public_key` must carry the PEM-encoded public key used
/// for verification.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Signing secret (HS256) or private key PEM (RS256)
    pub secret: String,

    /// Public key PEM for verification when using an asymmetric algorithm
    #[serde(default)]
    pub public_key: Option<String>,

    /// Algorithm identifier ("HS256", "RS256", ...)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in minutes
    pub access_token_ttl_minutes: i64,

    /// Refresh token lifetime in minutes
    pub refresh_token_ttl_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-in-production"),
            public_key: None,
            algorithm: default_algorithm(),
            access_token_ttl_minutes: 15,
            refresh_token_ttl_minutes: 60 * 24 * 2, // 2 days
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_PUBLIC_KEY`, `JWT_ALGORITHM`,
    /// `ACCESS_TOKEN_TTL_MINUTES` and `REFRESH_TOKEN_TTL_MINUTES`, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            public_key: std::env::var("JWT_PUBLIC_KEY").ok(),
            algorithm: std::env::var("JWT_ALGORITHM").unwrap_or(defaults.algorithm),
            access_token_ttl_minutes: env_i64(
                "ACCESS_TOKEN_TTL_MINUTES",
                defaults.access_token_ttl_minutes,
            ),
            refresh_token_ttl_minutes: env_i64(
                "REFRESH_TOKEN_TTL_MINUTES",
                defaults.refresh_token_ttl_minutes,
            ),
        }
    }

    /// Set the access token lifetime in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl_minutes = minutes;
        self
    }

    /// Set the refresh token lifetime in minutes
    pub fn with_refresh_ttl_minutes(mut self, minutes: i64) -> Self {
        self.refresh_token_ttl_minutes = minutes;
        self
    }

    /// Check if the development default secret is still in use
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-change-in-production"
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn env_i64(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
