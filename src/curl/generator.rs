//! cURL command generator.
//!
//! Turns any request-like value into a multi-line cURL command suitable for
//! sharing. Every argument is single-quoted; embedded single quotes use the
//! `'\''` close-escape-reopen technique.

use super::parser::ParsedCurlRequest;
use crate::models::request::{MaterializedRequest, Param, RequestTemplate};

/// Read access to the parts of a request that a cURL command carries.
pub trait CurlRequestLike {
    /// HTTP method, any case.
    fn method(&self) -> &str;
    /// Target URL.
    fn url(&self) -> &str;
    /// Headers in order.
    fn headers(&self) -> &[Param];
    /// Body, if any.
    fn body(&self) -> Option<&str>;
}

impl CurlRequestLike for ParsedCurlRequest {
    fn method(&self) -> &str {
        &self.method
    }
    fn url(&self) -> &str {
        &self.url
    }
    fn headers(&self) -> &[Param] {
        &self.headers
    }
    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl CurlRequestLike for RequestTemplate {
    fn method(&self) -> &str {
        &self.method
    }
    fn url(&self) -> &str {
        &self.url
    }
    fn headers(&self) -> &[Param] {
        &self.headers
    }
    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl CurlRequestLike for MaterializedRequest {
    fn method(&self) -> &str {
        &self.method
    }
    fn url(&self) -> &str {
        &self.url
    }
    fn headers(&self) -> &[Param] {
        &self.headers
    }
    fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Generates a cURL command from a request.
///
/// `-X` is omitted for `GET`. Headers with a blank name and blank bodies
/// are skipped. Headers and the body go on their own continued lines.
///
/// # Examples
///
/// ```
/// use rest_client_core::curl::generator::generate_curl_command;
/// use rest_client_core::models::RequestTemplate;
///
/// let mut request = RequestTemplate::new("POST", "https://x/y");
/// request.add_header("Content-Type", "application/json");
/// request.body = Some(r#"{"a":1}"#.to_string());
///
/// assert_eq!(
///     generate_curl_command(&request),
///     "curl -X POST 'https://x/y' \\\n  -H 'Content-Type: application/json' \\\n  -d '{\"a\":1}'"
/// );
/// ```
pub fn generate_curl_command<R: CurlRequestLike + ?Sized>(request: &R) -> String {
    let mut out = String::from("curl");

    let method = request.method().to_uppercase();
    if method != "GET" {
        out.push_str(" -X ");
        out.push_str(&method);
    }

    out.push_str(" '");
    out.push_str(&escape_single_quoted(request.url()));
    out.push('\'');

    for header in request.headers().iter().filter(|h| !h.has_blank_name()) {
        out.push_str(" \\\n  -H '");
        out.push_str(&escape_single_quoted(&header.name));
        out.push_str(": ");
        out.push_str(&escape_single_quoted(&header.value));
        out.push('\'');
    }

    if let Some(body) = request.body().filter(|b| !b.trim().is_empty()) {
        out.push_str(" \\\n  -d '");
        out.push_str(&escape_single_quoted(body));
        out.push('\'');
    }

    out
}

/// Escapes text for placement inside single quotes.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\'', "'\\''")
}
