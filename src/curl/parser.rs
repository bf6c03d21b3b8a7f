//! cURL command parser.
//!
//! Converts pasted cURL commands into a [`ParsedCurlRequest`]. Only the
//! flags that describe the request itself are understood; every other flag
//! is skipped without complaint, so commands copied from browser dev tools
//! or API docs import cleanly.

use super::tokenizer::{normalize, tokenize};
use crate::models::request::Param;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during cURL parsing.
///
/// Both variants mean "this text is not a cURL command" and callers are
/// expected to treat the input as a literal value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string is empty or contains only whitespace.
    #[error("Input is empty")]
    EmptyInput,
    /// The command doesn't start with "curl".
    #[error("Command does not start with 'curl'")]
    NotACurlCommand,
}

/// Request described by a cURL command.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedCurlRequest {
    /// Uppercased HTTP method. `GET` unless `-X` was given or a body forced `POST`.
    pub method: String,
    /// Target URL, empty if the command had none.
    pub url: String,
    /// Headers in command order. Duplicates are kept.
    pub headers: Vec<Param>,
    /// Body from the last data flag.
    pub body: Option<String>,
    /// Value of the last `Content-Type` header.
    pub content_type: Option<String>,
}

/// Parses a cURL command string into a [`ParsedCurlRequest`].
///
/// Recognized flags: `-X`/`--request`, `-H`/`--header`, `-d`/`--data`/
/// `--data-raw`/`--data-binary`/`--data-ascii` and `--url`. The first bare
/// word becomes the URL unless `--url` overrides it.
///
/// # Arguments
///
/// * `curl_str` - The raw command text, as pasted
///
/// # Returns
///
/// The parsed request, or a [`ParseError`] when the text is not a cURL command.
///
/// # Examples
///
/// ```
/// use rest_client_core::curl::parser::parse_curl_command;
///
/// let request = parse_curl_command("curl -d 'x=1' http://h").unwrap();
/// assert_eq!(request.method, "POST");
/// assert_eq!(request.url, "http://h");
/// ```
pub fn parse_curl_command(curl_str: &str) -> Result<ParsedCurlRequest, ParseError> {
    let sanitized = normalize(curl_str);

    if sanitized.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let starts_with_curl = sanitized
        .get(..4)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("curl"));
    if !starts_with_curl {
        return Err(ParseError::NotACurlCommand);
    }

    let tokens = tokenize(&sanitized);
    Ok(parse_tokens(&tokens))
}

/// Walks the tokens after the leading `curl`.
fn parse_tokens(tokens: &[String]) -> ParsedCurlRequest {
    let mut method = "GET".to_string();
    let mut url = String::new();
    let mut headers = Vec::new();
    let mut body: Option<String> = None;
    let mut content_type: Option<String> = None;

    let mut i = 1;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let next = tokens.get(i + 1);

        match token {
            "-X" | "--request" => {
                if let Some(value) = next {
                    method = value.to_uppercase();
                    i += 1;
                }
            }
            "-H" | "--header" => {
                if let Some(line) = next {
                    match parse_header(line) {
                        Some(header) => {
                            if header.name.eq_ignore_ascii_case("Content-Type") {
                                content_type = Some(header.value.clone());
                            }
                            headers.push(header);
                        }
                        None => log::debug!("dropping malformed header line: {}", line),
                    }
                    i += 1;
                }
            }
            "-d" | "--data" | "--data-raw" | "--data-binary" | "--data-ascii" => {
                if let Some(data) = next {
                    body = Some(data.clone());
                    i += 1;
                }
            }
            "--url" => {
                if let Some(value) = next {
                    url = value.clone();
                    i += 1;
                }
            }
            other => {
                if !other.starts_with('-') && url.is_empty() {
                    url = other.to_string();
                } else {
                    log::debug!("ignoring curl argument: {}", other);
                }
            }
        }

        i += 1;
    }

    if body.is_some() && method == "GET" {
        method = "POST".to_string();
    }

    ParsedCurlRequest {
        method,
        url: strip_stray_quotes(&url).to_string(),
        headers,
        body,
        content_type,
    }
}

/// Splits `Name: Value` on the first colon. Lines without a colon yield `None`.
fn parse_header(line: &str) -> Option<Param> {
    let (name, value) = line.split_once(':')?;
    Some(Param::new(name.trim(), value.trim()))
}

/// Removes one leading and one trailing quote character, if present.
fn strip_stray_quotes(url: &str) -> &str {
    let url = url
        .strip_prefix('\'')
        .or_else(|| url.strip_prefix('"'))
        .unwrap_or(url);
    url.strip_suffix('\'')
        .or_else(|| url.strip_suffix('"'))
        .unwrap_or(url)
}
