//! HTTP API server for team health checks.
//!
//! Serves the JSON create/list endpoints, the browser form, a liveness probe
//! and Prometheus metrics, with structured logging (tracing) on every request.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::HealthCheckService;
use metrics_exporter_prometheus::PrometheusHandle;
use record_store::RecordStore;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::health_checks::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: RecordStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::ui::index))
        .route("/health", get(routes::system::liveness))
        .route(
            "/api/health-checks",
            get(routes::health_checks::list::<S>).post(routes::health_checks::create::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around an already constructed store.
pub fn create_state<S: RecordStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        service: HealthCheckService::new(store),
    })
}
