//! In-memory implementation of TokenRepository for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::{DomainError, DomainResult};

use super::r#trait::TokenRepository;

/// In-memory token repository backed by a map keyed on `jti`
#[derive(Default)]
pub struct MockTokenRepository {
    records: Arc<RwLock<HashMap<Uuid, RefreshTokenRecord>>>,
    fail_saves: AtomicBool,
}

impl MockTokenRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail with a storage error
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Fetch a record by id (test inspection helper)
    pub async fn record(&self, jti: Uuid) -> Option<RefreshTokenRecord> {
        self.records.read().await.get(&jti).cloned()
    }

    /// Number of stored records, revoked ones included
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save(&self, record: RefreshTokenRecord) -> DomainResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::Storage {
                message: "simulated save failure".to_string(),
            });
        }

        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(DomainError::Storage {
                message: "duplicate refresh token id".to_string(),
            });
        }
        records.insert(record.id, record);
        Ok(())
    }

    async fn mark_revoked(&self, jti: Uuid) -> DomainResult<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(&jti) {
            Some(record) if !record.is_revoked => {
                record.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn exists_active(&self, jti: Uuid) -> DomainResult<bool> {
        let records = self.records.read().await;
        Ok(records.get(&jti).map(|r| !r.is_revoked).unwrap_or(false))
    }

    async fn bulk_mark_revoked_by_user(&self, user_id: Uuid) -> DomainResult<Vec<Uuid>> {
        let mut records = self.records.write().await;
        let mut revoked = Vec::new();

        for record in records.values_mut() {
            if record.user_id == user_id && !record.is_revoked {
                record.revoke();
                revoked.push(record.id);
            }
        }

        Ok(revoked)
    }
}
