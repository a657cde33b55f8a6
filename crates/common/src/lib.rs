//! Shared types for the team health check service.

pub mod instant;
mod types;

pub use instant::format_instant;
pub use types::RecordId;
