//! Command-spawning reload engine.
//!
//! The builtin reload entry point: shells out to a build command, captures
//! its console output, and maps the exit status to success or failure.

use std::process::{Command, Stdio};
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use super::{ReloadError, ReloadReport, Reloader};

/// Placeholder replaced by the reload target in the command template.
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// Reload engine that shells out to a build command.
///
/// The argv template may reference the target with `{target}`; when no
/// placeholder appears anywhere, the target is appended as the final
/// argument.
#[derive(Debug, Clone)]
pub struct CommandReloader {
    argv: Vec<String>,
}

impl CommandReloader {
    /// Create a reloader over an argv template.
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    /// Resolve the template against a target.
    fn resolved_argv(&self, target: &str) -> Vec<String> {
        let has_placeholder = self.argv.iter().any(|arg| arg.contains(TARGET_PLACEHOLDER));

        let mut argv: Vec<String> = self
            .argv
            .iter()
            .map(|arg| arg.replace(TARGET_PLACEHOLDER, target))
            .collect();

        if !has_placeholder {
            argv.push(target.to_string());
        }
        argv
    }
}

impl Reloader for CommandReloader {
    fn reload(&self, target: &str) -> Result<ReloadReport, ReloadError> {
        if self.argv.is_empty() || self.argv[0].is_empty() {
            return Err(ReloadError::new("reload command is empty"));
        }
        let argv = self.resolved_argv(target);

        log::debug!("reloading {} via {:?}", target, argv);
        let started_at = Utc::now();
        let started = Instant::now();

        let output = match Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                // A command that cannot start is a reload failure like any
                // other: the message becomes the console output.
                return Err(ReloadError::new(format!(
                    "failed to start {}: {}",
                    argv[0], err
                )));
            }
        };

        // stdout first, then stderr; both lossily decoded.
        let mut console = String::from_utf8_lossy(&output.stdout).into_owned();
        console.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(ReloadReport {
                attempt_id: Uuid::new_v4().to_string(),
                started_at,
                duration_ms: started.elapsed().as_millis() as u64,
                output: console,
            })
        } else {
            Err(ReloadError::new(console))
        }
    }
}
