//! Reload Gate - development-time code reload gate
//!
//! This crate implements a development-time middleware that recompiles the
//! application before each inbound request and, when compilation fails,
//! short-circuits the request with a self-contained HTML diagnostic page
//! instead of letting it reach application logic.

pub mod config;
pub mod gate;
pub mod mock;
pub mod page;
pub mod reloader;

pub use config::{
    ConfigError, ConfigOrigin, ConfigSource, EffectiveGateConfig, GateConfig, GateOverrides,
};
pub use gate::{apply, Action, DiagnosticResponse, Gate, RequestSink};
pub use page::render_diagnostic_page;
pub use reloader::{
    invoke, CommandReloader, FnReloader, ReloadError, ReloadOutcome, ReloadReport, Reloader,
};
pub use reload_summary::{escape_html, extract_summary, ErrorSummary};
