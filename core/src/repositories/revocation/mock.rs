//! In-memory implementation of RevocationCache for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

use super::r#trait::RevocationCache;

/// In-memory expiring marker store
///
/// Entries lapse lazily: `exists` treats a marker whose deadline has passed
/// as absent, matching the behavior of a TTL'd cache key.
#[derive(Default)]
pub struct MockRevocationCache {
    markers: Arc<RwLock<HashMap<Uuid, Instant>>>,
    fail_next_writes: AtomicUsize,
}

impl MockRevocationCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` write operations fail with a storage error
    pub fn fail_next_writes(&self, count: usize) {
        self.fail_next_writes.store(count, Ordering::SeqCst);
    }

    /// Number of markers currently stored, lapsed ones included
    pub async fn len(&self) -> usize {
        self.markers.read().await.len()
    }

    /// Whether the cache holds no markers
    pub async fn is_empty(&self) -> bool {
        self.markers.read().await.is_empty()
    }

    fn take_failure(&self) -> bool {
        self.fail_next_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl RevocationCache for MockRevocationCache {
    async fn set(&self, jti: Uuid, ttl_seconds: u64) -> DomainResult<()> {
        if self.take_failure() {
            return Err(DomainError::Storage {
                message: "simulated cache write failure".to_string(),
            });
        }

        let deadline = Instant::now() + Duration::from_secs(ttl_seconds);
        self.markers.write().await.insert(jti, deadline);
        Ok(())
    }

    async fn bulk_set(&self, jtis: &[Uuid], ttl_seconds: u64) -> DomainResult<()> {
        if self.take_failure() {
            return Err(DomainError::Storage {
                message: "simulated cache write failure".to_string(),
            });
        }

        let deadline = Instant::now() + Duration::from_secs(ttl_seconds);
        let mut markers = self.markers.write().await;
        for jti in jtis {
            markers.insert(*jti, deadline);
        }
        Ok(())
    }

    async fn exists(&self, jti: Uuid) -> DomainResult<bool> {
        let markers = self.markers.read().await;
        Ok(markers
            .get(&jti)
            .map(|deadline| Instant::now() < *deadline)
            .unwrap_or(false))
    }
}
