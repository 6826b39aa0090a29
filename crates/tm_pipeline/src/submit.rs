//! Submission phase machine: validate → submit → hand off → navigate.

use tm_client::AnalysisService;
use tm_core::AnalysisInput;
use tm_io::{HandoffRecord, HandoffStore, SessionStore};

use crate::surface::ControlSurface;
use crate::PipelineError;

/// Message shown when any input field is empty. Fixed text; the precise
/// field is only logged.
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";

/// Where the machine currently is. `Failed` keeps the form usable;
/// re-submission is always allowed from `Idle` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Submitting,
    NavigatingAway,
    Failed,
}

pub struct SubmissionController<C: AnalysisService, S: SessionStore> {
    service: C,
    store: HandoffStore<S>,
    phase: SubmitPhase,
}

impl<C: AnalysisService, S: SessionStore> SubmissionController<C, S> {
    pub fn new(service: C, store: HandoffStore<S>) -> Self {
        Self {
            service,
            store,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    fn transition(&mut self, next: SubmitPhase) {
        tracing::debug!(from = ?self.phase, to = ?next, "submit transition");
        self.phase = next;
    }

    /// Run one submission. The network call is the sole suspension point;
    /// `&mut self` plus the disabled control keep requests serialized.
    ///
    /// Errors have already been surfaced when this returns; the value is for
    /// the adapter's exit path.
    pub async fn submit(
        &mut self,
        input: &AnalysisInput,
        surface: &mut dyn ControlSurface,
    ) -> Result<(), PipelineError> {
        self.transition(SubmitPhase::Validating);
        if let Err(e) = input.validate() {
            tracing::debug!(error = %e, "submission rejected before the network");
            self.transition(SubmitPhase::Failed);
            surface.show_error(VALIDATION_MESSAGE);
            surface.set_submit_enabled(true);
            return Err(e.into());
        }

        self.transition(SubmitPhase::Submitting);
        surface.set_submit_enabled(false);
        surface.set_loading(true);
        surface.clear_error();

        let result = match self.service.analyze(input).await {
            Ok(result) => result,
            Err(e) => return Err(self.fail(surface, e.into())),
        };

        let record = HandoffRecord {
            input: input.clone(),
            result,
        };
        if let Err(e) = self.store.put(&record) {
            return Err(self.fail(surface, e.into()));
        }

        // The view is being replaced; no control-state rollback.
        self.transition(SubmitPhase::NavigatingAway);
        surface.navigate_to_results();
        Ok(())
    }

    fn fail(&mut self, surface: &mut dyn ControlSurface, error: PipelineError) -> PipelineError {
        tracing::warn!(error = %error, "submission failed");
        self.transition(SubmitPhase::Failed);
        surface.set_loading(false);
        surface.set_submit_enabled(true);
        surface.show_error(&format!("Failed to analyze: {error}"));
        error
    }
}
