//! Request gating on reload outcome.
//!
//! The gate is a pure decision function: given its configuration and a
//! reloader it produces an [`Action`] for one inbound request, and the
//! hosting adapter applies that action to the real request context via
//! [`apply`]. Nothing in here touches a live connection.

mod context;

pub use context::{apply, RequestSink};

use crate::config::GateConfig;
use crate::page::render_diagnostic_page;
use crate::reloader::{invoke, CommandReloader, ReloadOutcome, Reloader};

/// Status code of the diagnostic response.
pub const DIAGNOSTIC_STATUS: u16 = 500;

/// Content type of the diagnostic response.
pub const DIAGNOSTIC_CONTENT_TYPE: &str = "text/html";

/// Terminal HTTP response produced when a reload fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticResponse {
    /// HTTP status code (always 500).
    pub status: u16,

    /// Response content type (always `text/html`).
    pub content_type: &'static str,

    /// Complete self-contained HTML document.
    pub body: String,
}

/// Decision produced by the gate for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The request continues unmodified.
    PassThrough,

    /// Request processing stops; the response goes back to the client and no
    /// further handlers run.
    Terminate(DiagnosticResponse),
}

/// Development-time reload gate.
///
/// One gate serves many requests; it holds no per-request state and the
/// configuration is read-only, so concurrent [`Gate::check`] calls are
/// independent. Reload invocations may overlap; serializing them, if
/// desired, is the reload engine's business.
pub struct Gate<R: Reloader> {
    config: GateConfig,
    reloader: R,
}

impl<R: Reloader> Gate<R> {
    /// Create a gate over an explicit reloader.
    pub fn new(config: GateConfig, reloader: R) -> Self {
        Self { config, reloader }
    }

    /// Decide what to do with one inbound request.
    ///
    /// Invokes the reloader exactly once, and not at all when no target is
    /// configured: a missing target is logged and degrades to pass-through,
    /// so the gate never breaks the request pipeline through its own
    /// misconfiguration. Blocks for as long as the reload takes.
    pub fn check(&self) -> Action {
        let target = match self.config.target.as_deref() {
            Some(target) => target,
            None => {
                log::error!("reload gate misconfigured: a reload target must be configured");
                return Action::PassThrough;
            }
        };

        match invoke(&self.reloader, target) {
            ReloadOutcome::Ok => Action::PassThrough,
            ReloadOutcome::Error { output } => Action::Terminate(DiagnosticResponse {
                status: DIAGNOSTIC_STATUS,
                content_type: DIAGNOSTIC_CONTENT_TYPE,
                body: render_diagnostic_page(&output),
            }),
        }
    }

    /// Gate one request end to end: decide, then apply to the context.
    ///
    /// Returns the decision so callers can still inspect it.
    pub fn handle<S: RequestSink>(&self, sink: &mut S) -> Action {
        let action = self.check();
        apply(&action, sink);
        action
    }
}

impl Gate<CommandReloader> {
    /// Create a gate using the builtin command reload engine, built from the
    /// configured command template.
    pub fn with_default_reloader(config: GateConfig) -> Self {
        let reloader = CommandReloader::new(config.command.clone());
        Self { config, reloader }
    }
}
