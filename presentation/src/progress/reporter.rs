//! Progress reporting while the assistant is working

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use unitchat_application::ports::progress::ProgressNotifier;
use unitchat_domain::Model;

/// Shows a spinner on stderr while a request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(model.to_string());
        pb.set_message("Waiting for response...");
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_request_complete(&self, _model: &Model, _success: bool) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}
