//! Response body formatting.
//!
//! JSON bodies are re-indented for display; any body can be rendered as a
//! hex dump.

pub mod hex;
pub mod json;

pub use hex::hex_dump;
pub use json::{format_json, format_json_pretty, minify_json};

use crate::models::response::looks_like_json;
use thiserror::Error;

/// Errors that can occur during response formatting.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON formatting error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Response too large to format: {0} bytes")]
    TooLarge(usize),
}

/// Pretty-prints `body` if it looks like JSON, otherwise returns it as is.
pub fn prettify_body(body: &str) -> String {
    if looks_like_json(body) {
        format_json(body)
    } else {
        body.to_string()
    }
}
