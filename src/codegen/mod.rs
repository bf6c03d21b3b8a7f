//! Code generation for HTTP requests.
//!
//! Turns a request into a runnable client snippet for another language, the
//! same way the curl generator turns it into a shell command.

pub mod java;
pub mod kotlin;

use crate::curl::{generate_curl_command, CurlRequestLike};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Target of a generated snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Java 11 `java.net.http.HttpClient`
    Java,
    /// Kotlin with OkHttp
    Kotlin,
    /// A shell `curl` command
    Curl,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
            Language::Curl => "cURL",
        }
    }

    pub fn all() -> [Language; 3] {
        [Language::Curl, Language::Java, Language::Kotlin]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CodeGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "kotlin" | "okhttp" => Ok(Language::Kotlin),
            "curl" => Ok(Language::Curl),
            other => Err(CodeGenError::UnsupportedLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeGenError {
    #[error("Language '{0}' is not supported")]
    UnsupportedLanguage(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Generates a client snippet for `request`.
///
/// # Examples
///
/// ```
/// use rest_client_core::codegen::{generate_code, Language};
/// use rest_client_core::models::RequestTemplate;
///
/// let request = RequestTemplate::new("GET", "https://api.example.com/users");
/// let code = generate_code(&request, Language::Kotlin).unwrap();
/// assert!(code.contains(".url(\"https://api.example.com/users\")"));
/// ```
pub fn generate_code<R: CurlRequestLike + ?Sized>(
    request: &R,
    language: Language,
) -> Result<String, CodeGenError> {
    if request.url().trim().is_empty() {
        return Err(CodeGenError::InvalidRequest(
            "Request URL is empty".to_string(),
        ));
    }

    Ok(match language {
        Language::Java => java::generate_java11_code(request),
        Language::Kotlin => kotlin::generate_okhttp_code(request),
        Language::Curl => generate_curl_command(request),
    })
}

/// Escapes text for a double-quoted Java or Kotlin string literal.
pub(crate) fn escape_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
