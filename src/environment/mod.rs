//! Environment management
//!
//! Environments are named sets of variables; at most one is selected at a
//! time and it supplies the values for `{{name}}` placeholders. Extraction
//! rules write response values back into the selected environment.
//!
//! # Example
//!
//! ```
//! use rest_client_core::environment::{Environment, Environments, EnvironmentSession};
//!
//! let mut envs = Environments::new();
//! let mut dev = Environment::new("dev");
//! dev.set("baseUrl", "http://localhost:3000");
//! envs.add(dev);
//!
//! let session = EnvironmentSession::new(envs);
//! session.select("dev").unwrap();
//!
//! assert_eq!(session.get_variable("baseUrl").as_deref(), Some("http://localhost:3000"));
//! ```

pub mod loader;
pub mod models;

use crate::models::request::ExtractRule;
use crate::variables::extract::{try_execute_extraction, ExtractError};
use std::sync::{Arc, RwLock};

pub use loader::{
    find_environment_file, find_environment_file_named, load_environments, save_environments,
    EnvError, ENV_FILE_NAME,
};
pub use models::{Environment, Environments};

/// Shared handle to the loaded environments.
///
/// Clones share the same state, so the sender and whatever edits the
/// environments see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSession {
    environments: Arc<RwLock<Environments>>,
}

impl EnvironmentSession {
    pub fn new(environments: Environments) -> Self {
        Self {
            environments: Arc::new(RwLock::new(environments)),
        }
    }

    /// A copy of the selected environment, taken under the read lock.
    pub fn active_snapshot(&self) -> Option<Environment> {
        self.environments
            .read()
            .ok()
            .and_then(|envs| envs.active().cloned())
    }

    /// Selects an environment by id or name.
    pub fn select(&self, id_or_name: &str) -> Result<(), EnvError> {
        let mut envs = self.write()?;
        if envs.select(id_or_name) {
            Ok(())
        } else {
            Err(EnvError::NotFound(id_or_name.to_string()))
        }
    }

    /// Sets a variable in the selected environment.
    ///
    /// Returns false if nothing is selected.
    pub fn set_variable(&self, key: &str, value: &str) -> Result<bool, EnvError> {
        let mut envs = self.write()?;
        Ok(match envs.active_mut() {
            Some(env) => {
                env.set(key, value);
                true
            }
            None => false,
        })
    }

    /// Reads a variable from the selected environment.
    pub fn get_variable(&self, key: &str) -> Option<String> {
        self.environments
            .read()
            .ok()
            .and_then(|envs| envs.active().and_then(|env| env.get(key).cloned()))
    }

    /// Applies extraction rules to `body`, writing into the selected
    /// environment. The write lock is held for the whole rule set.
    pub fn apply_extraction(&self, body: &str, rules: &[ExtractRule]) -> Result<usize, ExtractError> {
        let mut envs = self
            .environments
            .write()
            .map_err(|_| ExtractError::NoActiveEnvironment)?;
        let env = envs.active_mut().ok_or(ExtractError::NoActiveEnvironment)?;
        try_execute_extraction(body, rules, env)
    }

    /// Replaces all environments, e.g. after reloading the file.
    pub fn reload(&self, environments: Environments) -> Result<(), EnvError> {
        *self.write()? = environments;
        Ok(())
    }

    /// A copy of everything, for saving.
    pub fn snapshot(&self) -> Environments {
        self.environments
            .read()
            .map(|envs| envs.clone())
            .unwrap_or_default()
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Environments>, EnvError> {
        self.environments
            .write()
            .map_err(|_| EnvError::InvalidFormat("Failed to acquire write lock".to_string()))
    }
}
