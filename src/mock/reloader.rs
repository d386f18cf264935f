//! Scripted mock reloader.
//!
//! Configurable reloader for testing gate decisions without invoking real
//! compilation.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::reloader::{ReloadError, ReloadReport, Reloader};

/// Scripted reloader for deterministic tests.
///
/// Outcomes queue front to back and are consumed one per call; an exhausted
/// queue reports success. Clones share the same script and call log, so a
/// test can keep a handle while the gate owns another.
#[derive(Clone, Default)]
pub struct MockReloader {
    script: Arc<Mutex<VecDeque<Result<ReloadReport, ReloadError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockReloader {
    /// Create a mock that succeeds until told otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful outcome.
    pub fn push_success(&self) {
        let mut script = self.script.lock().unwrap();
        script.push_back(Ok(ReloadReport::new("")));
    }

    /// Queue a failing outcome carrying the given console output.
    pub fn push_failure(&self, output: impl Into<String>) {
        let mut script = self.script.lock().unwrap();
        script.push_back(Err(ReloadError::new(output)));
    }

    /// Targets passed to `reload`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of `reload` calls seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Reloader for MockReloader {
    fn reload(&self, target: &str) -> Result<ReloadReport, ReloadError> {
        self.calls.lock().unwrap().push(target.to_string());

        let mut script = self.script.lock().unwrap();
        match script.pop_front() {
            Some(outcome) => outcome,
            None => Ok(ReloadReport::new("")),
        }
    }
}
