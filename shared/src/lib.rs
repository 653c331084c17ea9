//! Shared configuration types for the auth service
//!
//! This crate holds the process-lifetime configuration consumed by the core
//! and infrastructure layers: JWT signing settings, Redis cache settings and
//! database settings. Everything here is static after startup.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{CacheConfig, DatabaseConfig, JwtConfig};
