//! HTTP Basic credentials (RFC 7617).

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Builds the `Authorization` value for Basic auth.
///
/// Either part may be empty; the colon is always present.
///
/// ```
/// use rest_client_core::auth::basic::basic_auth;
///
/// assert_eq!(basic_auth("user", "pass"), "Basic dXNlcjpwYXNz");
/// assert_eq!(basic_auth("u", ""), "Basic dTo=");
/// ```
pub fn basic_auth(username: &str, password: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", username, password));
    format!("Basic {}", encoded)
}

/// Whether resolved credentials are worth sending: at least one side must
/// have non-whitespace content.
pub fn has_credentials(username: &str, password: &str) -> bool {
    !username.trim().is_empty() || !password.trim().is_empty()
}
