//! User store interface consumed by the session orchestrator.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Read-only user lookup
///
/// The token core never writes users; it only reads them to snapshot the
/// boolean flags into freshly issued access tokens.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;
}
