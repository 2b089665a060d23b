// src/progress.rs
/// Progress reporting for the pipelines (dataset pass, exports).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when a pipeline starts, with a short stage name.
    fn begin(&mut self, _stage: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Running count of dataset rows consumed so far.
    fn rows_read(&mut self, _n: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects status lines; used by the GUI status bar and tests.
#[derive(Default)]
pub struct LogProgress {
    pub lines: Vec<String>,
    pub rows: usize,
    pub done: bool,
}

impl Progress for LogProgress {
    fn begin(&mut self, stage: &str) {
        self.done = false;
        self.lines.push(join!("▶ ", stage));
    }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn rows_read(&mut self, n: usize) { self.rows = n; }
    fn finish(&mut self) { self.done = true; }
}
