//! Environment data models
//!
//! An environment is a named set of variables. The collection keeps the
//! environments in insertion order and remembers which one is selected.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// A named set of variables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    /// Stable identifier (uuid v4)
    #[serde(default = "new_id")]
    pub id: String,

    /// Display name (e.g., "dev", "staging", "production")
    pub name: String,

    /// Variable key-value pairs, written sorted by key
    #[serde(default, serialize_with = "serialize_sorted")]
    pub variables: HashMap<String, String>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn serialize_sorted<S>(variables: &HashMap<String, String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let ordered: BTreeMap<&String, &String> = variables.iter().collect();
    ordered.serialize(serializer)
}

impl Environment {
    /// Creates an empty environment with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            variables: HashMap::new(),
        }
    }

    /// Creates an environment with the given variables
    pub fn with_variables(name: impl Into<String>, variables: HashMap<String, String>) -> Self {
        Self {
            variables,
            ..Self::new(name)
        }
    }

    /// Gets a variable value by name
    pub fn get(&self, key: &str) -> Option<&String> {
        self.variables.get(key)
    }

    /// Sets a variable value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Removes a variable, returning its old value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.variables.remove(key)
    }

    /// Checks if a variable exists
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// All environments plus the current selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Environments {
    #[serde(default)]
    pub environments: Vec<Environment>,

    /// Id of the selected environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

impl Environments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an environment and returns its id
    pub fn add(&mut self, env: Environment) -> String {
        let id = env.id.clone();
        self.environments.push(env);
        id
    }

    /// Removes an environment by id. Clears the selection if it pointed there.
    pub fn remove(&mut self, id: &str) -> Option<Environment> {
        let position = self.environments.iter().position(|e| e.id == id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(self.environments.remove(position))
    }

    pub fn get(&self, id: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.id == id)
    }

    /// Finds the first environment with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.name == name)
    }

    /// Selects an environment by id, falling back to a name match.
    ///
    /// Returns false (leaving the selection unchanged) if nothing matches.
    pub fn select(&mut self, id_or_name: &str) -> bool {
        let found = self
            .get(id_or_name)
            .or_else(|| self.find_by_name(id_or_name))
            .map(|e| e.id.clone());

        match found {
            Some(id) => {
                self.selected = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected environment, if any
    pub fn active(&self) -> Option<&Environment> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Environment> {
        let id = self.selected.as_deref()?;
        self.environments.iter_mut().find(|e| e.id == id)
    }

    /// Names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.environments.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}
