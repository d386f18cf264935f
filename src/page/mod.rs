//! Diagnostic page rendering.
//!
//! The page is a complete document with inline styles and an inline logo, so
//! it renders even when the application's own assets are casualties of the
//! very compile failure being reported.

mod assets;

pub use assets::logo_data_uri;

use reload_summary::{escape_html, extract_summary};

/// Inline stylesheet for the diagnostic page.
const PAGE_CSS: &str = "\
:root { color-scheme: light; }
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;
  background: #f6f7f8;
  color: #1f2933;
}
header {
  display: flex;
  align-items: center;
  gap: 14px;
  padding: 22px 30px;
  background: #ffffff;
  border-bottom: 3px solid #b91c1c;
}
header img { flex: none; }
header h1 {
  margin: 0;
  font-size: 21px;
  line-height: 1.2;
  color: #b91c1c;
}
header p {
  margin: 4px 0 0;
  font-size: 15px;
  color: #3e4c59;
}
main { padding: 24px 30px; }
pre {
  margin: 0;
  padding: 18px 20px;
  overflow-x: auto;
  background: #1f2933;
  color: #e4e7eb;
  border-radius: 6px;
  font-family: SFMono-Regular, Consolas, 'Liberation Mono', Menlo, monospace;
  font-size: 13px;
  line-height: 1.5;
  white-space: pre;
}
";

/// Render the self-contained diagnostic page for a failed reload.
///
/// `output` is untrusted console text; every interpolation point is escaped.
/// The summary headline arrives pre-escaped from extraction and is embedded
/// verbatim, never re-escaped. Leading and trailing whitespace of `output`
/// is trimmed; internal formatting is preserved so stack traces stay
/// readable. Deterministic: the same output yields a byte-identical page.
pub fn render_diagnostic_page(output: &str) -> String {
    let summary = extract_summary(output);
    let kind = escape_html(&summary.error_kind);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Reload failed: {kind}</title>\n\
         <style>\n{css}</style>\n\
         </head>\n\
         <body>\n\
         <header>\n\
         <img src=\"{logo}\" alt=\"\" width=\"28\" height=\"28\">\n\
         <div>\n\
         <h1>{kind}</h1>\n\
         <p>{headline}</p>\n\
         </div>\n\
         </header>\n\
         <main>\n\
         <pre>{output}</pre>\n\
         </main>\n\
         </body>\n\
         </html>\n",
        kind = kind,
        headline = summary.headline,
        css = PAGE_CSS,
        logo = logo_data_uri(),
        output = escape_html(output.trim()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_summary_heading() {
        let page = render_diagnostic_page("** (RuntimeError) boom\nstack line 1");
        assert!(page.contains("<h1>RuntimeError</h1>"));
        assert!(page.contains("<p>boom</p>"));
    }

    #[test]
    fn test_page_embeds_defaults_without_banner() {
        let page = render_diagnostic_page("unstructured noise");
        assert!(page.contains("<h1>CompileError</h1>"));
        assert!(page.contains("<p>Compilation error</p>"));
    }

    #[test]
    fn test_page_is_self_contained() {
        let page = render_diagnostic_page("anything");
        assert!(page.contains("data:image/svg+xml;base64,"));
        assert!(!page.contains("http://"));
        assert!(!page.contains("https://"));
    }

    #[test]
    fn test_page_is_deterministic() {
        let output = "** (SyntaxError) bad token\n  at line 3";
        assert_eq!(render_diagnostic_page(output), render_diagnostic_page(output));
    }

    #[test]
    fn test_empty_output_renders() {
        let page = render_diagnostic_page("");
        assert!(page.contains("<pre></pre>"));
    }
}
