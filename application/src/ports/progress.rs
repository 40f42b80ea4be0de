//! Progress notification port
//!
//! Defines the interface for reporting the (possibly slow) enhancement call.

/// Callback for progress updates during enhancement
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_enhance_start(&self, model: &str);

    /// Called when the request finished, successfully or not
    fn on_enhance_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_enhance_start(&self, _model: &str) {}
    fn on_enhance_complete(&self, _success: bool) {}
}
