//! Business services implementing the token lifecycle.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use token::{AccessTokenService, RefreshTokenService, Signer, TokenConfig};
