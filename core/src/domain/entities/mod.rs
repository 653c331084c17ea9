//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{AccessClaims, RefreshClaims, RefreshTokenRecord};
pub use user::{User, UserSnapshot};
