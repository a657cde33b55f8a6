//! The submission form and its client-side checks.

use chrono::{DateTime, Utc};
use domain::{NewHealthCheck, ValidationErrors};
use serde_json::json;

/// Format of a `datetime-local` value at minute precision.
const LOCAL_MINUTES: &str = "%Y-%m-%dT%H:%M";

/// Values typed into the form, plus the issues from the last check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheckForm {
    pub name: String,
    pub feeling: String,
    pub date: String,
    errors: Option<ValidationErrors>,
}

impl HealthCheckForm {
    /// An empty form whose date defaults to `now`, cut to minutes.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            feeling: String::new(),
            date: default_date(now),
            errors: None,
        }
    }

    /// Runs the shared validation rules on the current values.
    ///
    /// On failure the issues are kept for display and `None` is returned;
    /// nothing should be sent.
    pub fn check(&mut self) -> Option<NewHealthCheck> {
        let payload = json!({
            "name": self.name,
            "feeling": self.feeling,
            "date": self.date,
        });

        match domain::validate(&payload) {
            Ok(submission) => {
                self.errors = None;
                Some(submission)
            }
            Err(errors) => {
                self.errors = Some(errors);
                None
            }
        }
    }

    /// Message for `field` from the last check, if it failed.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.as_ref().and_then(|e| e.message_for(field))
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Clears the inputs after a successful submission.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Self::new(now);
    }
}

fn default_date(now: DateTime<Utc>) -> String {
    now.format(LOCAL_MINUTES).to_string()
}
