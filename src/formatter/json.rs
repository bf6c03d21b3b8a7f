//! JSON pretty-printing and minification.

use super::FormatError;
use serde::Serialize;
use serde_json::Value;

/// Bodies larger than this are not re-indented.
const MAX_JSON_FORMAT_SIZE: usize = 10 * 1024 * 1024;

/// Re-indents JSON with two spaces.
///
/// ```
/// use rest_client_core::formatter::format_json_pretty;
///
/// let formatted = format_json_pretty(r#"{"name":"John","tags":[1,2]}"#).unwrap();
/// assert!(formatted.contains("  \"name\": \"John\""));
/// ```
pub fn format_json_pretty(json: &str) -> Result<String, FormatError> {
    if json.len() > MAX_JSON_FORMAT_SIZE {
        return Err(FormatError::TooLarge(json.len()));
    }

    let value: Value = serde_json::from_str(json)?;

    let mut buf = Vec::with_capacity(json.len() + json.len() / 2);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

/// Pretty-prints for display. Blank input gives an empty string; input that
/// does not parse comes back unchanged.
pub fn format_json(json: &str) -> String {
    if json.trim().is_empty() {
        return String::new();
    }
    match format_json_pretty(json) {
        Ok(formatted) => formatted,
        Err(e) => {
            log::debug!("leaving body unformatted: {}", e);
            json.to_string()
        }
    }
}

/// Removes all insignificant whitespace.
pub fn minify_json(json: &str) -> Result<String, FormatError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&value)?)
}
