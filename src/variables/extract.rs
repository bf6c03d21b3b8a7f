//! Response value extraction.
//!
//! Extraction rules pair an environment variable with a path into a JSON
//! response body. Paths are dot-separated field names, each optionally
//! followed by a bracketed index:
//!
//! ```text
//! data.token
//! data.list[0].id
//! ```
//!
//! Field names containing a literal `.` cannot be addressed.

use crate::environment::Environment;
use crate::models::request::ExtractRule;
use crate::models::response::{looks_like_json, RestResponse};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors raised while applying a rule set.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The body looked like JSON but did not parse.
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// There is no active environment to write into.
    #[error("no active environment")]
    NoActiveEnvironment,
}

/// Walks `root` along `path` and renders the value found there.
///
/// Objects and arrays are rendered as compact JSON text, strings without
/// quotes, and other scalars in their JSON form (`42`, `true`, `null`).
///
/// # Returns
///
/// `None` if a field is missing, an indexed node is not an array, or an
/// index is out of bounds.
///
/// # Examples
///
/// ```
/// use rest_client_core::variables::extract_value;
/// use serde_json::json;
///
/// let root = json!({"data": {"list": [{"id": 7}, {"id": 9}]}});
/// assert_eq!(extract_value(&root, "data.list[1].id"), Some("9".to_string()));
/// assert_eq!(extract_value(&root, "data.list[5].id"), None);
/// assert_eq!(extract_value(&root, "data.missing"), None);
/// ```
pub fn extract_value(root: &JsonValue, path: &str) -> Option<String> {
    let mut current = root;

    for segment in path.split('.') {
        current = match segment.split_once('[') {
            Some((name, rest)) => {
                let index = parse_index(rest);
                let container = if name.is_empty() {
                    current
                } else {
                    current.get(name)?
                };
                container.as_array()?.get(index)?
            }
            None => current.get(segment)?,
        };
    }

    Some(render(current))
}

/// Parses the text after `[` up to `]`. Anything unparsable selects index `0`.
fn parse_index(rest: &str) -> usize {
    let digits = rest.split(']').next().unwrap_or_default();
    digits.trim().parse().unwrap_or(0)
}

fn render(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Applies `rules` to `body`, writing into `environment`.
///
/// The body is parsed once up front, so a parse failure writes nothing.
/// Rules with a blank variable or path are skipped, as are rules whose path
/// does not resolve.
///
/// # Returns
///
/// The number of variables written.
pub fn try_execute_extraction(
    body: &str,
    rules: &[ExtractRule],
    environment: &mut Environment,
) -> Result<usize, ExtractError> {
    if rules.is_empty() || body.trim().is_empty() {
        return Ok(0);
    }

    if !looks_like_json(body) {
        log::debug!("skipping extraction: response body is not JSON");
        return Ok(0);
    }

    let root: JsonValue = serde_json::from_str(body)?;
    let mut count = 0;

    for rule in rules.iter().filter(|r| r.is_complete()) {
        match extract_value(&root, &rule.path) {
            Some(value) => {
                log::debug!("extracted '{}' from '{}'", rule.variable, rule.path);
                environment.set(rule.variable.clone(), value);
                count += 1;
            }
            None => log::debug!("path '{}' did not resolve", rule.path),
        }
    }

    Ok(count)
}

/// Like [`try_execute_extraction`] but never fails: errors are logged and
/// reported as zero extractions.
pub fn execute_extraction(body: &str, rules: &[ExtractRule], environment: &mut Environment) -> usize {
    match try_execute_extraction(body, rules, environment) {
        Ok(count) => count,
        Err(e) => {
            log::warn!("variable extraction skipped: {}", e);
            0
        }
    }
}

/// Applies `rules` to a response, but only when its status is 2xx.
pub fn extract_from_response(
    response: &RestResponse,
    rules: &[ExtractRule],
    environment: &mut Environment,
) -> usize {
    if !response.is_success() {
        return 0;
    }
    execute_extraction(&response.body, rules, environment)
}
