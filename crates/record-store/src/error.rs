use thiserror::Error;

/// Errors that can occur when interacting with the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the operation (constraint violation, permission
    /// denied, malformed statement). The message is the store's own.
    #[error("{0}")]
    Rejected(String),

    /// The store could not be reached: pool exhausted or closed, I/O, TLS
    /// or protocol failure. The message is the driver's own.
    #[error("{0}")]
    Unavailable(sqlx::Error),

    /// The store answered with something unusable, such as a row that does
    /// not decode.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Returns true if the store itself rejected the operation.
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Rejected(_))
    }

    /// Returns true if callers should see the store's message: the store
    /// refused the operation or could not be reached.
    pub fn is_reportable(&self) -> bool {
        matches!(self, StoreError::Rejected(_) | StoreError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => StoreError::Rejected(db_err.message().to_string()),
            err @ (sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)) => StoreError::Unavailable(err),
            other => StoreError::Database(other),
        }
    }
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
