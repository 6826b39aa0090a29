//! Results view: read the handoff, assemble the fragments, expose the
//! download lazily.

use chrono::{NaiveDate, NaiveDateTime};
use tm_io::{HandoffRecord, HandoffStore, SessionStore};
use tm_report::{assemble, render_report, report_filename, Fragment};

use crate::PipelineError;

/// Everything the results surface needs to show, plus the record for the
/// on-demand report.
#[derive(Debug)]
pub struct ResultsView {
    /// Header line combining the submitted niche with the view date.
    pub heading: String,
    /// The assembled interactive view.
    pub body: Fragment,
    pub record: HandoffRecord,
}

/// The downloadable artifact, produced only when asked for.
pub struct ReportDownload {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Load the most recent handoff record and build the view. Absence and
/// malformed data both come back as [`PipelineError::Store`]; nothing is
/// rendered in that case.
pub fn load_results<S: SessionStore>(
    store: &HandoffStore<S>,
    today: NaiveDate,
) -> Result<ResultsView, PipelineError> {
    let record = store.take()?;
    tracing::info!(niche = %record.input.niche, "rendering analysis results");

    let heading = format!(
        "Analysis for: {} | {}",
        record.input.niche,
        today.format("%Y-%m-%d")
    );
    let body = assemble(&record.result);
    Ok(ResultsView {
        heading,
        body,
        record,
    })
}

impl ResultsView {
    /// Generate the flat-text report. Called only when the user asks for the
    /// download, never during page load.
    pub fn report(&self, generated_at: NaiveDateTime) -> ReportDownload {
        let stamp = generated_at.format("%Y-%m-%d %H:%M:%S").to_string();
        ReportDownload {
            filename: report_filename(generated_at.date()),
            mime: "text/plain",
            contents: render_report(&self.record.input, &self.record.result, &stamp),
        }
    }
}
