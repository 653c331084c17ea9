//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Token validation failures are carried transparently as [`TokenError`];
/// store and cache faults are a separate category (`Storage`) and are never
/// folded into a token error, since a revocation that silently failed to
/// persist would be a security defect.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable error code for the routing layer to map onto transport responses
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Storage { .. } => "STORAGE_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Token(err) => err.error_code(),
        }
    }
}
