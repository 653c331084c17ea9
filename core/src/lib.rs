//! # Auth Core
//!
//! Core token lifecycle logic for the auth service. This crate contains the
//! domain entities, the token codecs (access and refresh), the revocation
//! bookkeeping and the session orchestrator, together with the repository
//! traits that abstract the durable store and the expiring revocation cache.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{AccessClaims, RefreshClaims, RefreshTokenRecord, TokenPair, User, UserSnapshot};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{
    MockRevocationCache, MockTokenRepository, MockUserRepository, RevocationCache, TokenRepository,
    UserRepository,
};
pub use services::{AccessTokenService, AuthService, RefreshTokenService, Signer, TokenConfig};
