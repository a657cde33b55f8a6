use std::time::Duration;

use async_trait::async_trait;
use domain::{HealthCheck, NewHealthCheck};
use reqwest::{Client, Response};
use serde_json::Value;

use crate::error::ClientError;

const HEALTH_CHECKS_PATH: &str = "/api/health-checks";

/// Operations the board needs from the health check API.
#[async_trait]
pub trait HealthCheckApi: Send + Sync {
    /// Fetches every record, newest first.
    async fn list(&self) -> Result<Vec<HealthCheck>, ClientError>;

    /// Submits one record and returns it as stored.
    async fn create(&self, submission: &NewHealthCheck) -> Result<HealthCheck, ClientError>;
}

/// Client for the team health check HTTP API.
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_CHECKS_PATH)
    }
}

#[async_trait]
impl HealthCheckApi for HttpClient {
    async fn list(&self) -> Result<Vec<HealthCheck>, ClientError> {
        let response = self.client.get(self.endpoint()).send().await?;
        let response = error_for_status(response, "Failed to fetch health checks").await?;
        Ok(response.json().await?)
    }

    async fn create(&self, submission: &NewHealthCheck) -> Result<HealthCheck, ClientError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(submission)
            .send()
            .await?;
        let response = error_for_status(response, "Failed to submit health check").await?;
        Ok(response.json().await?)
    }
}

/// Passes successful responses through; turns the rest into `ClientError::Api`.
async fn error_for_status(response: Response, fallback: &str) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: Option<Value> = response.json().await.ok();
    let message = body
        .as_ref()
        .and_then(error_message)
        .unwrap_or_else(|| fallback.to_string());

    tracing::debug!(status = status.as_u16(), %message, "API returned error status");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Reads the `error` field of an error body.
///
/// A string is used as is; a list of validation issues is joined by `"; "`.
pub fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Array(issues) if !issues.is_empty() => Some(
            issues
                .iter()
                .filter_map(|issue| issue.get("message").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; "),
        ),
        _ => None,
    }
}
