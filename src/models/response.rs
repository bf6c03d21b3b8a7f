//! HTTP response data model.
//!
//! The executor fills a [`RestResponse`] for every request, including ones
//! that never reached the server: transport failures are reported as status
//! code `0` with the failure message in the body.

use serde::{Deserialize, Serialize};

/// Response returned by an [`crate::executor::HttpExecutor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestResponse {
    /// HTTP status code, or `0` for a transport-level failure.
    pub status_code: u16,

    /// Response body decoded as text (possibly pretty-printed by the sender).
    pub body: String,

    /// Response body exactly as received.
    pub raw_body: Vec<u8>,

    /// Response headers in arrival order, multi-valued headers grouped.
    pub headers: Vec<(String, Vec<String>)>,

    /// Wall-clock duration of the exchange in milliseconds.
    pub duration_ms: u64,
}

impl RestResponse {
    /// Creates a response with the given status and body text.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            status_code,
            raw_body: body.as_bytes().to_vec(),
            body,
            headers: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Builds the status-`0` response that stands in for a failed exchange.
    ///
    /// # Arguments
    ///
    /// * `error` - Anything displayable describing the failure
    /// * `duration_ms` - Time spent before the failure
    pub fn transport_failure(error: impl std::fmt::Display, duration_ms: u64) -> Self {
        Self {
            status_code: 0,
            body: format!("Error: {}", error),
            raw_body: Vec::new(),
            headers: Vec::new(),
            duration_ms,
        }
    }

    /// Returns `true` for status codes 200 through 299.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }

    /// Returns `true` if this response represents a transport failure.
    pub fn is_transport_failure(&self) -> bool {
        self.status_code == 0
    }

    /// Cheap JSON sniffing: the trimmed body starts with `{` or `[`.
    pub fn looks_like_json(&self) -> bool {
        looks_like_json(&self.body)
    }

    /// Appends a header value, grouping repeated names.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => self.headers.push((name, vec![value])),
        }
    }

    /// Returns the values of a header, compared case-insensitively.
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_slice())
    }

    /// Renders headers one per line as `Name: v1,v2`.
    pub fn headers_string(&self) -> String {
        let mut out = String::new();
        for (name, values) in &self.headers {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(&values.join(","));
            out.push('\n');
        }
        out
    }
}

/// Leading-character JSON heuristic shared by the sender and the extractor.
pub fn looks_like_json(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range_is_inclusive() {
        assert!(RestResponse::new(200, "").is_success());
        assert!(RestResponse::new(299, "").is_success());
        assert!(!RestResponse::new(199, "").is_success());
        assert!(!RestResponse::new(300, "").is_success());
        assert!(!RestResponse::new(0, "").is_success());
    }

    #[test]
    fn test_transport_failure() {
        let response = RestResponse::transport_failure("connection refused", 12);

        assert!(response.is_transport_failure());
        assert_eq!(response.body, "Error: connection refused");
        assert_eq!(response.duration_ms, 12);
    }

    #[test]
    fn test_looks_like_json() {
        assert!(looks_like_json("  {\"a\": 1}"));
        assert!(looks_like_json("\n[1, 2]"));
        assert!(!looks_like_json("<html></html>"));
        assert!(!looks_like_json(""));
    }

    #[test]
    fn test_headers_grouped_and_rendered() {
        let mut response = RestResponse::new(200, "ok");
        response.add_header("Set-Cookie", "a=1");
        response.add_header("Content-Type", "text/plain");
        response.add_header("Set-Cookie", "b=2");

        assert_eq!(
            response.header_values("set-cookie"),
            Some(&["a=1".to_string(), "b=2".to_string()][..])
        );
        assert_eq!(
            response.headers_string(),
            "Set-Cookie: a=1,b=2\nContent-Type: text/plain\n"
        );
    }
}
