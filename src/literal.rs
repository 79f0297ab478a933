//! Turtle term encoding and HTML text escaping

use crate::id::is_uri;

/// Render a string as a Turtle object: a URI reference if it looks like
/// one, a string literal otherwise
///
/// Strings containing a newline use the long (`"""`) literal form.
pub fn turtle_term(value: &str) -> String {
    if is_uri(value) {
        format!("<{}>", value)
    } else {
        turtle_string(value)
    }
}

/// Render a string as a Turtle string literal, never as a reference
pub fn turtle_string(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "\\r");
    if value.contains('\n') {
        format!("\"\"\"{}\"\"\"", escaped)
    } else {
        format!("\"{}\"", escaped)
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
