//! Bearer tokens (RFC 6750).

/// Builds the `Authorization` value for a bearer token, or `None` when the
/// token is blank.
///
/// ```
/// use rest_client_core::auth::bearer::bearer_token;
///
/// assert_eq!(bearer_token("abc123").as_deref(), Some("Bearer abc123"));
/// assert_eq!(bearer_token("  "), None);
/// ```
pub fn bearer_token(token: &str) -> Option<String> {
    if token.trim().is_empty() {
        None
    } else {
        Some(format!("Bearer {}", token))
    }
}
