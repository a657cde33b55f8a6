//! Domain layer for the team health check service.
//!
//! This crate provides:
//! - the validation rules shared by the API and its clients
//! - `HealthCheckService`, the create/list operations over a record store

pub mod error;
pub mod health_check;

pub use error::DomainError;
pub use health_check::{
    FEELINGS, HealthCheckService, ValidationErrors, ValidationIssue, parse_instant, validate,
};
pub use record_store::{HealthCheck, NewHealthCheck, RecordId};
