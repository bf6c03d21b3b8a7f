//! Environment file loading and saving
//!
//! Environments are stored as a single pretty-printed JSON document:
//!
//! ```json
//! {
//!   "environments": [
//!     { "id": "…", "name": "dev", "variables": { "host": "a.com" } }
//!   ],
//!   "selected": "…"
//! }
//! ```
//!
//! Variable values may be written as strings, numbers, booleans or null;
//! they are all read back as strings.

use super::models::{Environment, Environments};
use crate::config::get_config;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing environments
#[derive(Debug, Error)]
pub enum EnvError {
    /// No environment matches the given id or name
    #[error("Environment '{0}' not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse environment file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but has the wrong shape
    #[error("Invalid environment format: {0}")]
    InvalidFormat(String),
}

/// Default environment file name
pub const ENV_FILE_NAME: &str = "rest-client.env.json";

/// Maximum number of parent directories to search
const MAX_PARENT_SEARCH_DEPTH: usize = 3;

/// Loads environments from `path`.
///
/// A missing file is not an error: it yields an empty collection.
pub fn load_environments(path: &Path) -> Result<Environments, EnvError> {
    if !path.is_file() {
        log::debug!("no environment file at {}", path.display());
        return Ok(Environments::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Environments::new());
    }

    let raw: Value = serde_json::from_str(&content)?;
    parse_environment_file(raw)
}

/// Writes environments to `path` as pretty JSON, creating parent directories.
pub fn save_environments(path: &Path, environments: &Environments) -> Result<(), EnvError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(environments)?;
    fs::write(path, json)?;
    Ok(())
}

/// Finds the configured `environmentFile` in `start` or up to three parent
/// directories.
pub fn find_environment_file(start: &Path) -> Option<PathBuf> {
    find_environment_file_named(start, &get_config().environment_file)
}

/// Finds `file_name` in `start` or up to three parent directories.
pub fn find_environment_file_named(start: &Path, file_name: &str) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    for _ in 0..=MAX_PARENT_SEARCH_DEPTH {
        let candidate = current.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

fn parse_environment_file(raw: Value) -> Result<Environments, EnvError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| EnvError::InvalidFormat("Root must be a JSON object".to_string()))?;

    let mut environments = Environments::new();

    if let Some(list) = obj.get("environments") {
        let list = list
            .as_array()
            .ok_or_else(|| EnvError::InvalidFormat("'environments' must be an array".to_string()))?;

        for entry in list {
            environments.add(parse_environment(entry)?);
        }
    }

    match obj.get("selected") {
        None | Some(Value::Null) => {}
        Some(Value::String(id)) => {
            if environments.get(id).is_none() {
                return Err(EnvError::InvalidFormat(format!(
                    "Selected environment '{}' does not exist",
                    id
                )));
            }
            environments.selected = Some(id.clone());
        }
        Some(_) => {
            return Err(EnvError::InvalidFormat(
                "'selected' must be a string".to_string(),
            ))
        }
    }

    Ok(environments)
}

fn parse_environment(entry: &Value) -> Result<Environment, EnvError> {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| EnvError::InvalidFormat("Environment is missing a name".to_string()))?;

    let mut env = Environment::new(name);
    if let Some(id) = entry.get("id").and_then(Value::as_str) {
        env.id = id.to_string();
    }
    if let Some(vars) = entry.get("variables") {
        env.variables = parse_variable_map(vars, name)?;
    }

    Ok(env)
}

fn parse_variable_map(value: &Value, context: &str) -> Result<HashMap<String, String>, EnvError> {
    let obj = value.as_object().ok_or_else(|| {
        EnvError::InvalidFormat(format!("Variables of '{}' must be a JSON object", context))
    })?;

    let mut map = HashMap::new();

    for (key, val) in obj {
        let value_str = match val {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            _ => {
                return Err(EnvError::InvalidFormat(format!(
                    "Variable '{}' in '{}' has invalid type (must be string, number, or boolean)",
                    key, context
                )));
            }
        };

        map.insert(key.clone(), value_str);
    }

    Ok(map)
}
