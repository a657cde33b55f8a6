//! Team health check submissions.

mod service;
pub mod validation;

pub use service::HealthCheckService;
pub use validation::{ValidationErrors, ValidationIssue, parse_instant, validate};

/// Feelings offered by the form's selector.
///
/// Only a presentation hint: the service accepts any non-empty label.
pub const FEELINGS: [&str; 5] = ["Great", "Good", "Okay", "Not Great", "Bad"];
