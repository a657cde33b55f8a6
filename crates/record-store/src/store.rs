use async_trait::async_trait;

use crate::{HealthCheck, NewHealthCheck, Result};

/// Core trait for record store implementations.
///
/// A record store persists health checks and returns them newest first.
/// Records are append-only: there is no update or delete.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a single record.
    ///
    /// The store assigns `id` and `created_at`; the full persisted row is
    /// returned.
    async fn insert(&self, record: NewHealthCheck) -> Result<HealthCheck>;

    /// Retrieves every record ordered by `created_at` descending, then by
    /// `id` descending.
    ///
    /// An empty store yields an empty vector.
    async fn list_recent_first(&self) -> Result<Vec<HealthCheck>>;
}

/// Extension trait providing convenience methods for record stores.
#[async_trait]
pub trait RecordStoreExt: RecordStore {
    /// Inserts several records one round trip at a time, in order.
    async fn insert_all(&self, records: Vec<NewHealthCheck>) -> Result<Vec<HealthCheck>> {
        let mut stored = Vec::with_capacity(records.len());
        for record in records {
            stored.push(self.insert(record).await?);
        }
        Ok(stored)
    }

    /// Returns the most recently created record, if any.
    async fn latest(&self) -> Result<Option<HealthCheck>> {
        Ok(self.list_recent_first().await?.into_iter().next())
    }
}

// Blanket implementation for all RecordStore implementations
impl<T: RecordStore + ?Sized> RecordStoreExt for T {}

/// Sort order shared by every store: newest first, `id` as tie-breaker.
pub fn newest_first(a: &HealthCheck, b: &HealthCheck) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}
