//! Reload invocation.
//!
//! The gate never recompiles anything itself. It delegates to a [`Reloader`]
//! and normalizes whatever comes back into the two-variant [`ReloadOutcome`]
//! the decision logic runs on.

mod command;

pub use command::{CommandReloader, TARGET_PLACEHOLDER};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Success payload of a reload attempt.
///
/// The gate discards this; it exists for callers that want to report on
/// reload activity (the CLI prints it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadReport {
    /// Unique id for this attempt.
    pub attempt_id: String,

    /// When the attempt started.
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,

    /// Console output produced by the engine (may be empty).
    pub output: String,
}

impl ReloadReport {
    /// Create a report stamped with a fresh attempt id and the current time.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            attempt_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            duration_ms: 0,
            output: output.into(),
        }
    }

    /// Set the wall-clock duration.
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Failure surfaced by a reload engine.
///
/// Not a fault of the gate: a failed reload is the expected, modeled outcome
/// that drives rendering of the diagnostic page.
#[derive(Debug, Clone, Error)]
#[error("reload failed:\n{output}")]
pub struct ReloadError {
    /// Raw console output describing the failure. May be multi-line and has
    /// no guaranteed structure.
    pub output: String,
}

impl ReloadError {
    /// Create a reload failure carrying raw console output.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

/// Normalized result of a reload attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReloadOutcome {
    /// The application compiled; the request may proceed.
    Ok,
    /// Compilation failed; `output` is the raw console text.
    Error { output: String },
}

impl ReloadOutcome {
    /// True when the outcome allows the request through.
    pub fn is_ok(&self) -> bool {
        matches!(self, ReloadOutcome::Ok)
    }
}

/// The seam between the gate and the reload engine.
///
/// Implementors perform the actual recompilation. Tests substitute
/// deterministic fakes; the builtin engine is [`CommandReloader`].
pub trait Reloader {
    /// Recompile `target`.
    ///
    /// May block for as long as compilation takes; the gate imposes no
    /// timeout and no mutual exclusion across concurrent calls.
    fn reload(&self, target: &str) -> Result<ReloadReport, ReloadError>;
}

/// Adapter implementing [`Reloader`] for plain closures.
pub struct FnReloader<F>(pub F);

impl<F> Reloader for FnReloader<F>
where
    F: Fn(&str) -> Result<ReloadReport, ReloadError>,
{
    fn reload(&self, target: &str) -> Result<ReloadReport, ReloadError> {
        (self.0)(target)
    }
}

/// Invoke a reloader and normalize its result.
///
/// The success payload is discarded; only the binary success/failure
/// distinction and, on failure, the output text survive. Failures from the
/// underlying engine are data here, never faults.
pub fn invoke<R: Reloader + ?Sized>(reloader: &R, target: &str) -> ReloadOutcome {
    match reloader.reload(target) {
        Ok(_) => ReloadOutcome::Ok,
        Err(err) => ReloadOutcome::Error { output: err.output },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_discards_success_payload() {
        let reloader = FnReloader(|_: &str| Ok(ReloadReport::new("compiled 3 files")));
        assert_eq!(invoke(&reloader, "app"), ReloadOutcome::Ok);
    }

    #[test]
    fn test_invoke_retains_failure_output() {
        let reloader = FnReloader(|_: &str| Err(ReloadError::new("** (RuntimeError) boom")));
        assert_eq!(
            invoke(&reloader, "app"),
            ReloadOutcome::Error {
                output: "** (RuntimeError) boom".to_string()
            }
        );
    }

    #[test]
    fn test_invoke_passes_target_through() {
        let reloader = FnReloader(|target: &str| {
            assert_eq!(target, "my_app");
            Ok(ReloadReport::new(""))
        });
        assert!(invoke(&reloader, "my_app").is_ok());
    }

    #[test]
    fn test_outcome_serialization_tags() {
        let ok = serde_json::to_string(&ReloadOutcome::Ok).unwrap();
        assert_eq!(ok, r#"{"kind":"ok"}"#);

        let err = serde_json::to_string(&ReloadOutcome::Error {
            output: "boom".to_string(),
        })
        .unwrap();
        assert!(err.contains(r#""kind":"error""#));
        assert!(err.contains(r#""output":"boom""#));
    }

    #[test]
    fn test_report_builder() {
        let report = ReloadReport::new("out").with_duration_ms(42);
        assert_eq!(report.duration_ms, 42);
        assert_eq!(report.output, "out");
        assert!(!report.attempt_id.is_empty());
    }
}
