//! Unit tests for the token services


use crate::services::token::TokenConfig;

/// HS256 config used across the token service tests
pub(crate) fn test_config() -> TokenConfig {
    TokenConfig {
        secret: "unit-test-secret".to_string(),
        ..TokenConfig::default()
    }
}
