//! Token services
//!
//! This module holds everything that touches a compact signed token:
//! - the signing/verification primitive ([`Signer`])
//! - the access-token codec backed by the revocation cache
//! - the refresh-token codec backed by the durable store
//! - the shared token configuration

mod access;
mod config;
mod refresh;
mod signer;

#[cfg(test)]
mod tests;

pub use access::AccessTokenService;
pub use config::TokenConfig;
pub use refresh::RefreshTokenService;
pub use signer::Signer;
