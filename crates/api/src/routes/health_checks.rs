//! Create and list endpoints for health check records.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use domain::{HealthCheck, HealthCheckService};
use record_store::RecordStore;
use serde_json::Value;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: RecordStore> {
    pub service: HealthCheckService<S>,
}

/// POST /api/health-checks — validate and store one submission.
///
/// The body is decoded by hand so a malformed payload is reported in the
/// same `{ error: [...] }` shape as any other validation failure, whatever
/// its content type.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<Json<HealthCheck>, ApiError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::malformed_body(&e))?;

    let record = state.service.create(&payload).await?;
    Ok(Json(record))
}

/// GET /api/health-checks — every record, newest first.
#[tracing::instrument(skip(state))]
pub async fn list<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<HealthCheck>>, ApiError> {
    let records = state.service.list().await?;
    Ok(Json(records))
}
