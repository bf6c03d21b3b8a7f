//! HTTP authentication.
//!
//! A request carries an [`AuthConfig`]: plain data describing which scheme to
//! apply and with which (possibly templated) credentials. Applying it is a
//! pure function of the config and the active variables, producing an
//! [`AuthOutcome`] the materializer merges into the request.

pub mod apikey;
pub mod basic;
pub mod bearer;

pub use apikey::ApiKeyLocation;

use crate::models::request::Param;
use crate::variables::substitution::resolve;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authentication settings attached to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthConfig {
    #[default]
    None,
    Bearer {
        token: String,
    },
    Basic {
        username: String,
        password: String,
    },
    ApiKey {
        key: String,
        value: String,
        #[serde(default)]
        location: ApiKeyLocation,
    },
}

/// What applying an [`AuthConfig`] adds to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Nothing,
    Header(Param),
    Query(Param),
}

impl AuthConfig {
    /// Builds a config from the stored `{ type, fields }` form.
    ///
    /// Recognized types are `bearer`, `basic` and `apikey`; anything else
    /// (including `noauth`) yields [`AuthConfig::None`]. Missing fields read
    /// as empty strings.
    pub fn from_descriptor(auth_type: &str, fields: &HashMap<String, String>) -> Self {
        let field = |name: &str| fields.get(name).cloned().unwrap_or_default();

        match auth_type {
            "bearer" => AuthConfig::Bearer {
                token: field("token"),
            },
            "basic" => AuthConfig::Basic {
                username: field("username"),
                password: field("password"),
            },
            "apikey" => AuthConfig::ApiKey {
                key: field("key"),
                value: field("value"),
                location: ApiKeyLocation::from_label(fields.get("where").map(String::as_str)),
            },
            other => {
                if other != "noauth" && other != "none" && !other.is_empty() {
                    log::debug!("unknown auth type '{}', treating as none", other);
                }
                AuthConfig::None
            }
        }
    }

    /// Converts back to the stored `{ type, fields }` form.
    pub fn to_descriptor(&self) -> (String, HashMap<String, String>) {
        let mut fields = HashMap::new();
        let auth_type = match self {
            AuthConfig::None => "noauth",
            AuthConfig::Bearer { token } => {
                fields.insert("token".to_string(), token.clone());
                "bearer"
            }
            AuthConfig::Basic { username, password } => {
                fields.insert("username".to_string(), username.clone());
                fields.insert("password".to_string(), password.clone());
                "basic"
            }
            AuthConfig::ApiKey {
                key,
                value,
                location,
            } => {
                fields.insert("key".to_string(), key.clone());
                fields.insert("value".to_string(), value.clone());
                fields.insert("where".to_string(), location.as_label().to_string());
                "apikey"
            }
        };
        (auth_type.to_string(), fields)
    }

    /// Resolves the credentials against `variables` and decides what to add.
    ///
    /// - bearer: a header, unless the resolved token is blank
    /// - basic: a header, unless both resolved parts are blank
    /// - apikey: a header or query pair named by the resolved key, unless the
    ///   key is blank
    pub fn resolve(&self, variables: Option<&HashMap<String, String>>) -> AuthOutcome {
        let r = |text: &str| resolve(Some(text), variables);

        match self {
            AuthConfig::None => AuthOutcome::Nothing,
            AuthConfig::Bearer { token } => match bearer::bearer_token(&r(token)) {
                Some(value) => AuthOutcome::Header(Param::new("Authorization", value)),
                None => AuthOutcome::Nothing,
            },
            AuthConfig::Basic { username, password } => {
                let (user, pass) = (r(username), r(password));
                if basic::has_credentials(&user, &pass) {
                    AuthOutcome::Header(Param::new("Authorization", basic::basic_auth(&user, &pass)))
                } else {
                    AuthOutcome::Nothing
                }
            }
            AuthConfig::ApiKey {
                key,
                value,
                location,
            } => {
                let key = r(key);
                if key.trim().is_empty() {
                    return AuthOutcome::Nothing;
                }
                let pair = Param::new(key, r(value));
                match location {
                    ApiKeyLocation::Header => AuthOutcome::Header(pair),
                    ApiKeyLocation::Query => AuthOutcome::Query(pair),
                }
            }
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, AuthConfig::None)
    }
}
