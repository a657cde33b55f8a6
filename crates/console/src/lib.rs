//! Terminal client for the team health check API.
//!
//! [`Board`] holds what the screen shows and drives the API through
//! [`HealthCheckApi`]; [`render`] turns it into text.

pub mod board;
pub mod client;
pub mod error;
pub mod form;
pub mod render;

pub use board::{Board, LoadPhase, SubmitOutcome, SubmitPhase};
pub use client::{HealthCheckApi, HttpClient};
pub use error::ClientError;
pub use form::HealthCheckForm;
pub use render::{render, render_form_errors};
