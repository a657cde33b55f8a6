//! Domain error types.

use record_store::StoreError;
use thiserror::Error;

use crate::health_check::ValidationErrors;

/// Errors that can occur during health check operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The submission failed one or more rules.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// An error occurred in the record store.
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),
}
