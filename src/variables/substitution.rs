//! Placeholder substitution.
//!
//! Replaces `{{name}}` placeholders with values from the active environment.
//! Substitution is a single pass over the template: text produced by a
//! substituted value is never scanned again, so a value that itself looks
//! like `{{other}}` ends up in the output verbatim. Placeholders with no
//! matching variable are left untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Matches `{{name}}` where the name contains no braces.
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("Failed to compile placeholder regex"));

/// Substitutes `{{name}}` placeholders from `variables`.
///
/// Names are matched literally (no trimming), so `{{ host }}` only resolves
/// if a variable named ` host ` exists.
///
/// # Examples
///
/// ```
/// use rest_client_core::variables::substitute_variables;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("host".to_string(), "a.com".to_string());
/// vars.insert("id".to_string(), "5".to_string());
///
/// assert_eq!(substitute_variables("{{host}}/api/{{id}}", &vars), "a.com/api/5");
/// ```
pub fn substitute_variables(text: &str, variables: &HashMap<String, String>) -> String {
    if variables.is_empty() || !text.contains("{{") {
        return text.to_string();
    }

    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Resolves optional template text against an optional variable mapping.
///
/// An absent template resolves to an empty string. With no active
/// environment the template is returned unchanged.
pub fn resolve(text: Option<&str>, variables: Option<&HashMap<String, String>>) -> String {
    match (text, variables) {
        (None, _) => String::new(),
        (Some(text), None) => text.to_string(),
        (Some(text), Some(vars)) => substitute_variables(text, vars),
    }
}
