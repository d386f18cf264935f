//! Inline assets for the diagnostic page.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Logo mark shown in the diagnostic page header.
const LOGO_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\
<circle cx=\"12\" cy=\"12\" r=\"11\" fill=\"#b91c1c\"/>\
<path d=\"M12 5.5v8.5\" stroke=\"#ffffff\" stroke-width=\"2.6\" stroke-linecap=\"round\"/>\
<circle cx=\"12\" cy=\"17.8\" r=\"1.6\" fill=\"#ffffff\"/>\
</svg>";

/// Data URI for the inline logo.
///
/// Encoded on demand so the page never fetches an external resource.
pub fn logo_data_uri() -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(LOGO_SVG))
}
