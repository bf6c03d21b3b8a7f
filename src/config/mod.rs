//! Engine configuration.
//!
//! Settings are read from the host's JSON settings under the `"rest-client"`
//! key, merged over defaults, validated, and kept in a process-wide
//! singleton that executors snapshot when they are built.

pub mod schema;

pub use schema::{ConfigError, EngineConfig};

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Key under which the settings live.
pub const SETTINGS_KEY: &str = "rest-client";

static CONFIG: Lazy<RwLock<EngineConfig>> = Lazy::new(|| RwLock::new(EngineConfig::default()));

/// Loads configuration from a settings document and installs it globally.
///
/// Settings that fail to deserialize are ignored with a warning. Settings
/// that deserialize but fail validation install the defaults and return the
/// validation error.
///
/// # Example
///
/// ```
/// use rest_client_core::config::{load_config, reset_config};
/// use serde_json::json;
///
/// let config = load_config(Some(json!({
///     "rest-client": { "timeoutSecs": 30 }
/// })))
/// .unwrap();
/// assert_eq!(config.timeout_secs, 30);
/// assert_eq!(config.connect_timeout_secs, 10);
/// # reset_config();
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<EngineConfig, ConfigError> {
    let mut config = EngineConfig::default();

    if let Some(section) = settings_json.as_ref().and_then(|s| s.get(SETTINGS_KEY)) {
        match serde_json::from_value::<EngineConfig>(section.clone()) {
            Ok(user_config) => config = user_config,
            Err(e) => log::warn!("Failed to parse {} settings: {}. Using defaults.", SETTINGS_KEY, e),
        }
    }

    if let Err(e) = config.validate() {
        log::warn!("{}. Using defaults.", e);
        install(EngineConfig::default());
        return Err(e);
    }

    install(config.clone());
    Ok(config)
}

/// Returns a copy of the current configuration.
pub fn get_config() -> EngineConfig {
    CONFIG.read().map(|c| c.clone()).unwrap_or_default()
}

/// Applies `updater` to the global configuration.
///
/// If the result fails validation, the previous configuration is kept.
pub fn update_config<F>(updater: F) -> Result<(), ConfigError>
where
    F: FnOnce(&mut EngineConfig),
{
    let mut candidate = get_config();
    updater(&mut candidate);

    if let Err(e) = candidate.validate() {
        log::warn!("Rejected configuration update: {}", e);
        return Err(e);
    }

    install(candidate);
    Ok(())
}

/// Restores the defaults.
pub fn reset_config() {
    install(EngineConfig::default());
}

fn install(config: EngineConfig) {
    if let Ok(mut global) = CONFIG.write() {
        *global = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(get_config(), EngineConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_config_with_user_settings() {
        let config = load_config(Some(json!({
            "rest-client": {
                "timeoutSecs": 90,
                "prettyPrintJson": false,
                "defaultScheme": "https://"
            }
        })))
        .unwrap();

        assert_eq!(config.timeout_secs, 90);
        assert!(!config.pretty_print_json);
        assert_eq!(get_config().default_scheme, "https://");
        assert_eq!(get_config().connect_timeout_secs, 10);
        reset_config();
    }

    #[test]
    #[serial]
    fn test_load_config_unparsable_section_uses_defaults() {
        let config = load_config(Some(json!({
            "rest-client": { "timeoutSecs": "soon" }
        })))
        .unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_config_invalid_values() {
        update_config(|c| c.timeout_secs = 120).unwrap();

        let result = load_config(Some(json!({
            "rest-client": { "timeoutSecs": 0 }
        })));

        assert!(result.is_err());
        assert_eq!(get_config(), EngineConfig::default());
    }

    #[test]
    #[serial]
    fn test_no_rest_client_key() {
        let config = load_config(Some(json!({"editor": {"fontSize": 14}}))).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    #[serial]
    fn test_update_config() {
        reset_config();
        update_config(|c| c.follow_redirects = false).unwrap();
        assert!(!get_config().follow_redirects);
        reset_config();
        assert!(get_config().follow_redirects);
    }

    #[test]
    #[serial]
    fn test_update_config_invalid_keeps_previous() {
        reset_config();
        update_config(|c| c.timeout_secs = 30).unwrap();

        assert!(update_config(|c| c.connect_timeout_secs = 0).is_err());
        assert_eq!(get_config().timeout_secs, 30);
        assert_eq!(get_config().connect_timeout_secs, 10);
        reset_config();
    }
}
