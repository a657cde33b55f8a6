//! HTTP handlers, grouped by concern.

pub mod health_checks;
pub mod system;
pub mod ui;
