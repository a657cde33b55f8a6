//! View state of the health check screen.
//!
//! The board is loaded once (`Loading → Ready`) and then accepts
//! submissions one at a time (`Idle → Submitting → Idle`). Either flow can
//! set the error line; a successful submission clears it.

use chrono::Utc;
use domain::{HealthCheck, NewHealthCheck};

use crate::client::HealthCheckApi;
use crate::error::ClientError;
use crate::form::HealthCheckForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// What happened to a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form failed its checks; nothing was sent.
    Invalid,
    /// A submission is already in flight.
    Busy,
    /// The server stored the record; it is now first in the list.
    Submitted(HealthCheck),
    /// The request failed; the error line is set.
    Failed,
}

#[derive(Debug)]
pub struct Board {
    load_phase: LoadPhase,
    submit_phase: SubmitPhase,
    records: Vec<HealthCheck>,
    error: Option<String>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            load_phase: LoadPhase::Loading,
            submit_phase: SubmitPhase::Idle,
            records: Vec::new(),
            error: None,
        }
    }

    pub fn load_phase(&self) -> LoadPhase {
        self.load_phase
    }

    pub fn submit_phase(&self) -> SubmitPhase {
        self.submit_phase
    }

    pub fn records(&self) -> &[HealthCheck] {
        &self.records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches the initial list.
    pub async fn load<A: HealthCheckApi + ?Sized>(&mut self, api: &A) {
        let result = api.list().await;
        self.finish_load(result);
    }

    /// Applies the outcome of the initial fetch. The board is ready either way.
    pub fn finish_load(&mut self, result: Result<Vec<HealthCheck>, ClientError>) {
        match result {
            Ok(records) => self.records = records,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load health checks");
                self.error = Some(err.to_string());
            }
        }
        self.load_phase = LoadPhase::Ready;
    }

    /// Checks the form and sends it.
    pub async fn submit<A: HealthCheckApi + ?Sized>(
        &mut self,
        api: &A,
        form: &mut HealthCheckForm,
    ) -> SubmitOutcome {
        let submission = match self.begin_submit(form) {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };
        let result = api.create(&submission).await;
        self.finish_submit(result, form)
    }

    /// Validates the form and enters `Submitting`.
    ///
    /// Returns the submission to send, or the outcome when there is nothing
    /// to send.
    pub fn begin_submit(
        &mut self,
        form: &mut HealthCheckForm,
    ) -> Result<NewHealthCheck, SubmitOutcome> {
        if self.submit_phase == SubmitPhase::Submitting {
            return Err(SubmitOutcome::Busy);
        }
        let submission = form.check().ok_or(SubmitOutcome::Invalid)?;
        self.submit_phase = SubmitPhase::Submitting;
        Ok(submission)
    }

    /// Applies the server's answer and returns to `Idle`.
    pub fn finish_submit(
        &mut self,
        result: Result<HealthCheck, ClientError>,
        form: &mut HealthCheckForm,
    ) -> SubmitOutcome {
        self.submit_phase = SubmitPhase::Idle;
        match result {
            Ok(record) => {
                self.records.insert(0, record.clone());
                self.error = None;
                form.reset(Utc::now());
                SubmitOutcome::Submitted(record)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to submit health check");
                self.error = Some(err.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}
