//! Per-executor settings, snapshotted from the global configuration.

use crate::config::{get_config, EngineConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings one executor uses for every request it sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub default_scheme: String,
    pub default_content_type: Option<String>,
    pub follow_redirects: bool,
    pub validate_ssl: bool,
}

impl ExecutionConfig {
    /// Snapshot of the global configuration.
    pub fn from_global_config() -> Self {
        Self::from(&get_config())
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self.connect_timeout_secs = self.connect_timeout_secs.min(timeout_secs);
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Prepends the default scheme unless `url` already starts with `http`.
    pub fn normalize_url(&self, url: &str) -> String {
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.default_scheme, url)
        }
    }
}

impl From<&EngineConfig> for ExecutionConfig {
    fn from(config: &EngineConfig) -> Self {
        Self {
            timeout_secs: config.timeout_secs,
            connect_timeout_secs: config.connect_timeout_secs,
            default_scheme: config.default_scheme.clone(),
            default_content_type: config.default_content_type.clone(),
            follow_redirects: config.follow_redirects,
            validate_ssl: config.validate_ssl,
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::from_global_config()
    }
}
