//! API error types with HTTP response mapping.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{DomainError, ValidationErrors, ValidationIssue};

/// Body of every 500 response; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// API-level error type that maps to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input; answered with the field-level issues.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// The store refused the operation or could not be reached; answered
    /// with its message.
    #[error("{0}")]
    Store(String),
    /// Anything else. Logged, answered with a generic message.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Wraps a body that could not be decoded as JSON.
    pub fn malformed_body(err: &serde_json::Error) -> Self {
        ApiError::Validation(ValidationErrors::new(vec![ValidationIssue::root(format!(
            "Malformed JSON body: {err}"
        ))]))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!(errors.into_issues()),
            ),
            ApiError::Store(msg) => {
                tracing::warn!(error = %msg, "store failed request");
                (StatusCode::BAD_REQUEST, serde_json::json!(msg))
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!(INTERNAL_ERROR_MESSAGE),
                )
            }
        };

        let body = serde_json::json!({ "error": error });
        (status, axum::Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => ApiError::Validation(errors),
            DomainError::Store(store_err) if store_err.is_reportable() => {
                ApiError::Store(store_err.to_string())
            }
            DomainError::Store(store_err) => ApiError::Internal(store_err.to_string()),
        }
    }
}

/// Converts a panic caught in a handler into the generic 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
