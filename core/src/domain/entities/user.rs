//! User entity as seen by the token lifecycle core.
//!
//! User CRUD lives outside this system; the core only reads users to
//! snapshot their boolean flags into freshly issued access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Whether the account is enabled
    pub is_active: bool,

    /// Whether the account has elevated privileges
    pub is_superuser: bool,

    /// Whether the account has completed verification
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with default flags
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            is_active: true,
            is_superuser: false,
            is_verified: false,
            created_at: Utc::now(),
        }
    }
}

/// Boolean flags captured into access-token claims at issuance time
///
/// These are not re-read from the user store on validation; they stay stale
/// until the user logs in again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSnapshot {
    pub is_active: bool,
    pub is_verified: bool,
    pub is_superuser: bool,
}

impl From<&User> for UserSnapshot {
    fn from(user: &User) -> Self {
        Self {
            is_active: user.is_active,
            is_verified: user.is_verified,
            is_superuser: user.is_superuser,
        }
    }
}
