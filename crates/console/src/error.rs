use thiserror::Error;

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The client could not be built from its configuration.
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns the HTTP status for server-side failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
