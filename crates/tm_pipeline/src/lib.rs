//! tm_pipeline — the two controllers between the views.
//!
//! The submission side is a phase machine (`submit`); the results side is a
//! load-and-assemble step (`results`). Both stay surface-agnostic: every
//! user-visible change goes through the [`surface::ControlSurface`] trait or
//! comes back as a value, and adapters decide what a "button" or a "page"
//! actually is.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod results;
pub mod submit;
pub mod surface;

pub use results::{load_results, ReportDownload, ResultsView};
pub use submit::{SubmissionController, SubmitPhase, VALIDATION_MESSAGE};
pub use surface::ControlSurface;

/// Single error surface for both controllers.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required input field was empty; nothing left the machine.
    #[error("{0}")]
    Validation(#[from] tm_core::CoreError),

    /// The analysis request failed (status, transport, or decode).
    #[error("{0}")]
    Service(#[from] tm_client::ClientError),

    /// The handoff store was absent, malformed, or unwritable.
    #[error("{0}")]
    Store(#[from] tm_io::StoreError),
}
