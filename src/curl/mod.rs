//! cURL command parsing and generation.
//!
//! This module converts between pasted cURL commands and structured requests.
//! Parsing normalizes the text, tokenizes it with a small quote-aware state
//! machine and dispatches on the handful of flags that describe a request.
//! Generation produces a multi-line command with single-quoted arguments.
//!
//! # Examples
//!
//! ## Parsing a cURL command
//!
//! ```
//! use rest_client_core::curl::parse_curl_command;
//!
//! let curl = r#"curl -X POST https://api.example.com/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"John Doe"}'"#;
//!
//! let request = parse_curl_command(curl).unwrap();
//! assert_eq!(request.url, "https://api.example.com/users");
//! assert_eq!(request.content_type.as_deref(), Some("application/json"));
//! ```
//!
//! ## Generating a cURL command
//!
//! ```
//! use rest_client_core::curl::generate_curl_command;
//! use rest_client_core::models::RequestTemplate;
//!
//! let request = RequestTemplate::new("GET", "https://api.example.com/users");
//! assert_eq!(generate_curl_command(&request), "curl 'https://api.example.com/users'");
//! ```
//!
//! # Supported cURL Flags
//!
//! - `-X`, `--request` - HTTP method
//! - `-H`, `--header` - HTTP headers
//! - `-d`, `--data`, `--data-raw`, `--data-binary`, `--data-ascii` - Request body
//! - `--url` - Target URL
//!
//! Everything else is ignored rather than rejected.

pub mod generator;
pub mod parser;
pub mod tokenizer;

pub use generator::{generate_curl_command, CurlRequestLike};
pub use parser::{parse_curl_command, ParseError, ParsedCurlRequest};
