//! In-memory implementation of UserRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

use super::r#trait::UserRepository;

/// In-memory user store
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn get_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_round_trip() {
        let repo = MockUserRepository::new();
        let user = User::new("a@example.com");
        let id = user.id;

        repo.insert(user.clone()).await;
        assert_eq!(repo.get_by_id(id).await.unwrap(), Some(user));
        assert_eq!(repo.get_by_id(Uuid::new_v4()).await.unwrap(), None);
    }
}
