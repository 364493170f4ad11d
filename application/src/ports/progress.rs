//! Progress notification port
//!
//! Reports the idle → awaiting response → idle cycle of an assistant request.

use unitchat_domain::Model;

/// Callback for progress updates while waiting on the assistant
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, model: &Model);

    /// Called once the request has finished, successfully or not
    fn on_request_complete(&self, model: &Model, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _model: &Model) {}
    fn on_request_complete(&self, _model: &Model, _success: bool) {}
}
