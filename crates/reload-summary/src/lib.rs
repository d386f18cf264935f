//! Best-effort error-summary extraction from compiler/console output.
//!
//! Scans free-form tool output for a `** (Kind) message` banner line and
//! produces a structured summary suitable for a diagnostic page heading.
//! Output with no banner yields generic defaults; the raw output is expected
//! to be shown in full alongside the summary, so nothing is lost either way.

mod escape;
mod summary;

pub use escape::escape_html;
pub use summary::{ErrorSummary, DEFAULT_ERROR_KIND, DEFAULT_HEADLINE};

use regex_lite::Regex;

/// Pattern for a console error banner: `** (Kind) message`.
///
/// The kind is one or more non-space characters, the message is the rest of
/// that line. Anchored to line boundaries so a banner is only recognized at
/// the start of a line.
const BANNER_PATTERN: &str = r"(?m)^\*\* \((\S+)\) (.*)$";

/// Extract a structured error summary from raw console output.
///
/// The first banner line wins when scanning top to bottom; later `** (...)`
/// occurrences are ignored. The returned headline is trimmed and
/// HTML-escaped; the error kind is returned raw and must be escaped at the
/// point of use. This is a heuristic over unstructured tool output, not a
/// parser: it never fails, for any input including the empty string.
pub fn extract_summary(output: &str) -> ErrorSummary {
    let banner = Regex::new(BANNER_PATTERN).unwrap();

    match banner.captures(output) {
        Some(caps) => {
            let kind = caps
                .get(1)
                .map(|m| m.as_str())
                .unwrap_or(DEFAULT_ERROR_KIND);
            let message = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            ErrorSummary {
                error_kind: kind.to_string(),
                headline: escape_html(message.trim()),
            }
        }
        None => ErrorSummary::default(),
    }
}
