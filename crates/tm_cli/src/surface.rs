//! Terminal rendering of the submission machine's effects.

use std::time::Duration;

use indicatif::ProgressBar;
use tm_pipeline::ControlSurface;

pub struct CliSurface {
    spinner: Option<ProgressBar>,
    quiet: bool,
    navigated: bool,
}

impl CliSurface {
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: None,
            quiet,
            navigated: false,
        }
    }

    /// True once the machine handed control to the results view.
    pub fn navigated(&self) -> bool {
        self.navigated
    }

    fn drop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl ControlSurface for CliSurface {
    fn set_submit_enabled(&mut self, _enabled: bool) {
        // A terminal has no persistent submit control; one process is one
        // submission.
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            if !self.quiet {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message("Analyzing trends...");
                spinner.enable_steady_tick(Duration::from_millis(120));
                self.spinner = Some(spinner);
            }
        } else {
            self.drop_spinner();
        }
    }

    fn show_error(&mut self, message: &str) {
        self.drop_spinner();
        eprintln!("{message}");
    }

    fn clear_error(&mut self) {
        // Errors scroll away on a terminal; nothing to retract.
    }

    fn navigate_to_results(&mut self) {
        self.drop_spinner();
        self.navigated = true;
    }
}
