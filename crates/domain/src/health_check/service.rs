//! Record service providing create and list over an injected store.

use record_store::{HealthCheck, RecordStore};
use serde_json::Value;

use super::validation::validate;
use crate::error::DomainError;

/// Service for recording and listing health checks.
///
/// The store is handed in at construction; the service holds no other state.
pub struct HealthCheckService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> HealthCheckService<S> {
    /// Creates a new service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates `input` and inserts it as one row.
    ///
    /// Nothing is written when validation fails.
    #[tracing::instrument(skip(self, input))]
    pub async fn create(&self, input: &Value) -> Result<HealthCheck, DomainError> {
        let submission = match validate(input) {
            Ok(submission) => submission,
            Err(err) => {
                metrics::counter!("health_checks_rejected_total").increment(1);
                tracing::debug!(error = %err, "submission failed validation");
                return Err(err.into());
            }
        };

        let record = self.store.insert(submission).await?;

        metrics::counter!("health_checks_created_total").increment(1);
        tracing::info!(id = %record.id, feeling = %record.feeling, "health check recorded");
        Ok(record)
    }

    /// Returns every record, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<HealthCheck>, DomainError> {
        let records = self.store.list_recent_first().await?;

        metrics::counter!("health_checks_listed_total").increment(1);
        tracing::debug!(count = records.len(), "health checks listed");
        Ok(records)
    }
}
