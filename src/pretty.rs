//! Pretty-printing with an ignore-and-no-op failure policy: a payload
//! that does not parse comes back unchanged.

use serde_json::Value;

/// Reformat a JSON payload with 2-space indentation.
///
/// Object keys keep their insertion order (serde_json is built with
/// `preserve_order`), so formatting never reorders a document. Empty and
/// invalid payloads are returned verbatim. Idempotent: formatting an
/// already formatted payload reproduces it.
pub fn format(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_owned();
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_owned()),
        Err(_) => text.to_owned(),
    }
}
