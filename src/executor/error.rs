//! HTTP request execution error types.

use thiserror::Error;

/// Errors that can occur while executing a materialized request.
///
/// Executors fold these into a [`RestResponse`](crate::models::RestResponse)
/// with status `0` rather than returning them.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection failures, DNS errors and other network-level issues.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("TLS/SSL error: {0}")]
    Tls(String),

    /// The request could not be constructed (bad method, bad header, ...).
    #[error("Request build error: {0}")]
    Build(String),

    /// A multipart file part could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            RequestError::Timeout
        } else if err.is_builder() {
            RequestError::Build(message)
        } else if message.contains("certificate") || message.contains("TLS") || message.contains("SSL") {
            RequestError::Tls(message)
        } else {
            RequestError::Network(message)
        }
    }
}

impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}
