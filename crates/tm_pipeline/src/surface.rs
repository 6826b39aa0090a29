//! Seam between the submission machine and whatever renders it.
//!
//! Every method corresponds to a visibility or enablement change; the
//! machine never mutates UI state except through here.

pub trait ControlSurface {
    /// Enable or disable the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Show or hide the loading indicator.
    fn set_loading(&mut self, loading: bool);

    /// Surface a short, human-readable error message.
    fn show_error(&mut self, message: &str);

    /// Clear any previously shown error.
    fn clear_error(&mut self);

    /// Hand control to the results view.
    fn navigate_to_results(&mut self);
}
