//! Persistence for team health check records.
//!
//! [`RecordStore`] is the seam between the service and the table; the
//! PostgreSQL implementation is used in production and the in-memory one in
//! tests and local runs without a database.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use common::RecordId;
pub use error::{Result, StoreError};
pub use memory::InMemoryRecordStore;
pub use postgres::PostgresRecordStore;
pub use record::{HealthCheck, NewHealthCheck};
pub use store::{RecordStore, RecordStoreExt};
