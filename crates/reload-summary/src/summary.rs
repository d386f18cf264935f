//! Structured summary of a failed reload.

use serde::{Deserialize, Serialize};

/// Fallback error kind when no banner line is found.
pub const DEFAULT_ERROR_KIND: &str = "CompileError";

/// Fallback headline when no banner line is found.
pub const DEFAULT_HEADLINE: &str = "Compilation error";

/// Short categorized summary extracted from console output.
///
/// `headline` is stored trimmed and HTML-escaped, ready for interpolation
/// into markup. `error_kind` is raw and must be escaped at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSummary {
    /// Short category token, e.g. an exception or module name.
    pub error_kind: String,

    /// Short human-readable message, HTML-escaped.
    pub headline: String,
}

impl Default for ErrorSummary {
    fn default() -> Self {
        Self {
            error_kind: DEFAULT_ERROR_KIND.to_string(),
            headline: DEFAULT_HEADLINE.to_string(),
        }
    }
}
