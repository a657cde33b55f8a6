use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::RecordId;
use tokio::sync::RwLock;

use crate::{
    HealthCheck, NewHealthCheck, Result, StoreError,
    store::{RecordStore, newest_first},
};

#[derive(Default)]
struct Table {
    rows: Vec<HealthCheck>,
    last_id: i64,
}

/// In-memory record store for tests and database-less local runs.
///
/// Mirrors the PostgreSQL table: sequential IDs, `created_at` stamped on
/// insert, and the same non-empty checks on `name` and `feeling`.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRecordStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn record_count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

fn check_not_empty(record: &NewHealthCheck) -> Result<()> {
    if record.name.is_empty() {
        return Err(StoreError::Rejected(
            "new row for relation \"team_health\" violates check constraint \"team_health_name_not_empty\""
                .to_string(),
        ));
    }
    if record.feeling.is_empty() {
        return Err(StoreError::Rejected(
            "new row for relation \"team_health\" violates check constraint \"team_health_feeling_not_empty\""
                .to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, record: NewHealthCheck) -> Result<HealthCheck> {
        check_not_empty(&record)?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        // Wall clock may step backwards; insertion order must not.
        let created_at = match table.rows.last() {
            Some(prev) => Utc::now().max(prev.created_at),
            None => Utc::now(),
        };
        let stored = record.into_record(RecordId::new(table.last_id), created_at);
        table.rows.push(stored.clone());

        tracing::debug!(id = %stored.id, "record inserted");
        Ok(stored)
    }

    async fn list_recent_first(&self) -> Result<Vec<HealthCheck>> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by(newest_first);
        Ok(rows)
    }
}
