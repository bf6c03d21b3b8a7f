//! Configuration schema.
//!
//! All settings live under the `"rest-client"` key of the host's JSON
//! settings. Missing settings take their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Whole-request timeout in seconds. Must be greater than 0.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds. Must be greater than 0 and no larger
    /// than `timeout_secs`.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Prepended to URLs that do not start with `http`.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,

    /// Content-Type sent when the request does not set one.
    /// `null` disables the fallback.
    #[serde(default = "default_content_type")]
    pub default_content_type: Option<String>,

    /// Re-indent JSON response bodies before display.
    #[serde(default = "default_true")]
    pub pretty_print_json: bool,

    #[serde(default = "default_true")]
    pub follow_redirects: bool,

    /// Reject invalid TLS certificates.
    #[serde(default = "default_true")]
    pub validate_ssl: bool,

    /// Environment file name, relative to the workspace.
    #[serde(default = "default_environment_file")]
    pub environment_file: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            default_scheme: default_scheme(),
            default_content_type: default_content_type(),
            pretty_print_json: true,
            follow_redirects: true,
            validate_ssl: true,
            environment_file: default_environment_file(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeoutSecs must be greater than 0".to_string(),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "connectTimeoutSecs must be greater than 0".to_string(),
            ));
        }
        if self.connect_timeout_secs > self.timeout_secs {
            return Err(ConfigError::Invalid(
                "connectTimeoutSecs must not exceed timeoutSecs".to_string(),
            ));
        }
        if !self.default_scheme.ends_with("://") {
            return Err(ConfigError::Invalid(format!(
                "defaultScheme must end with \"://\", got '{}'",
                self.default_scheme
            )));
        }
        if self.environment_file.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "environmentFile must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_scheme() -> String {
    "http://".to_string()
}

fn default_content_type() -> Option<String> {
    Some("application/json".to_string())
}

fn default_true() -> bool {
    true
}

fn default_environment_file() -> String {
    crate::environment::ENV_FILE_NAME.to_string()
}
