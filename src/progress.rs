// src/progress.rs
/// Status reporting for the one long-running operation (the dataset load).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once when work starts; `what` names the source.
    fn begin(&mut self, _what: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
