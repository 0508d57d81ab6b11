// src/progress.rs
/// Lightweight progress reporting for an export run.
/// Frontends implement this to surface status to users; library callers
/// that don't care pass [`NullProgress`].
pub trait Progress {
    /// Called before rendering with the number of games to render.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per rendered game, with its entry id.
    fn item_done(&mut self, _id: usize) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects status lines; handy in tests.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub done: Vec<usize>,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, id: usize) { self.done.push(id); }
}
