//! Request templating and curl interoperability for in-editor REST clients.
//!
//! This crate is the engine behind a REST client panel. It converts between
//! pasted `curl` commands and structured requests, resolves `{{variable}}`
//! placeholders against the selected environment, assembles the final
//! wire-level request, and copies values out of JSON responses back into
//! the environment.
//!
//! # Architecture
//!
//! - **models**: request templates, materialized requests and responses
//! - **curl**: curl command tokenizer, parser and generator
//! - **variables**: `{{name}}` substitution and JSON path extraction
//! - **auth**: bearer, basic and API-key authentication descriptors
//! - **materializer**: template + environment -> wire-level request
//! - **environment**: named variable sets, selection and persistence
//! - **headers**: header name suggestions
//! - **executor**: the executor boundary and a reqwest implementation
//!   (feature `native`)
//! - **sender**: materialize, execute, format, extract
//! - **formatter**: JSON pretty-printing and hex dumps
//! - **codegen**: Java and Kotlin client snippets
//! - **config**: engine settings
//!
//! # Example
//!
//! ```
//! use rest_client_core::curl::{generate_curl_command, parse_curl_command};
//! use rest_client_core::environment::Environment;
//! use rest_client_core::materializer::materialize;
//! use rest_client_core::models::RequestTemplate;
//!
//! let parsed = parse_curl_command(
//!     "curl -H 'Authorization: Bearer {{token}}' https://{{host}}/me",
//! )
//! .unwrap();
//! let template = RequestTemplate::from(parsed);
//!
//! let mut env = Environment::new("dev");
//! env.set("host", "api.example.com");
//! env.set("token", "abc");
//!
//! let request = materialize(&template, Some(&env)).request;
//! assert_eq!(
//!     generate_curl_command(&request),
//!     "curl 'https://api.example.com/me' \\\n  -H 'Authorization: Bearer abc'"
//! );
//! ```

pub mod auth;
pub mod codegen;
pub mod config;
pub mod curl;
pub mod environment;
pub mod executor;
pub mod formatter;
pub mod headers;
pub mod materializer;
pub mod models;
pub mod sender;
pub mod variables;

pub use curl::{generate_curl_command, parse_curl_command};
pub use environment::{Environment, EnvironmentSession, Environments};
pub use executor::HttpExecutor;
pub use materializer::{materialize, Materialized};
pub use models::{MaterializedRequest, RequestTemplate, RestResponse};
pub use sender::{RequestSender, SendOutcome};
