//! Token pair value object returned to the caller on login and refresh.

use serde::{Deserialize, Serialize};

/// A freshly issued refresh/access token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,

    /// Token scheme expected by the transport layer
    pub token_type: String,
}

impl TokenPair {
    /// Creates a new token pair with lifetimes given in minutes
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_ttl_minutes: i64,
        refresh_ttl_minutes: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: access_ttl_minutes * 60,
            refresh_expires_in: refresh_ttl_minutes * 60,
            token_type: "Bearer".to_string(),
        }
    }
}
