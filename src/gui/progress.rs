// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    stage: String,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, stage: s!() }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, stage: &str) {
        self.stage = s!(stage);
        self.set_status(format!("Running {stage}…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn rows_read(&mut self, n: usize) {
        self.set_status(format!("{}: {} rows", self.stage, n));
    }
    fn finish(&mut self) {
        self.set_status(format!("{} complete", self.stage));
    }
}
