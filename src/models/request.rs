//! Request data models.
//!
//! This module defines the stored request template that the UI edits and
//! persists, and the fully resolved request that is handed to the executor.

use crate::auth::AuthConfig;
use serde::{Deserialize, Deserializer, Serialize};

/// A name/value pair.
///
/// Used for headers, query parameters and anything else that is an ordered
/// list of pairs where duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    /// Parameter or header name.
    pub name: String,
    /// Parameter or header value. May contain `{{variable}}` placeholders.
    #[serde(default)]
    pub value: String,
}

impl Param {
    /// Creates a new pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns `true` if the name is empty or whitespace only.
    ///
    /// Blank-named entries are skipped by the materializer and the generators.
    pub fn has_blank_name(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// One part of a `multipart/form-data` body.
///
/// Multipart bodies are assembled by the executor, which also picks the
/// boundary and therefore owns the Content-Type header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FormPart {
    /// Plain text field.
    Text { name: String, value: String },
    /// File field, read from disk when the request is sent.
    File { name: String, path: std::path::PathBuf },
}

impl FormPart {
    /// Returns the form field name.
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Declared body type of a stored request.
///
/// The serialized labels are the ones the editor shows in its body type
/// selector, so stored templates round-trip unchanged. Reading goes through
/// [`BodyType::from_label`], so unknown labels and `null` load as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BodyType {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "x-www-form-urlencoded")]
    FormUrlEncoded,
    #[serde(rename = "raw (json)")]
    RawJson,
    #[serde(rename = "raw (xml)")]
    RawXml,
    #[serde(rename = "raw (text)")]
    RawText,
    #[serde(rename = "multipart/form-data")]
    Multipart,
}

impl BodyType {
    /// Returns the editor label for this body type.
    pub fn as_label(&self) -> &'static str {
        match self {
            BodyType::None => "none",
            BodyType::FormUrlEncoded => "x-www-form-urlencoded",
            BodyType::RawJson => "raw (json)",
            BodyType::RawXml => "raw (xml)",
            BodyType::RawText => "raw (text)",
            BodyType::Multipart => "multipart/form-data",
        }
    }

    /// Parses an editor label. Unknown labels map to [`BodyType::None`].
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "x-www-form-urlencoded" => BodyType::FormUrlEncoded,
            "raw (json)" => BodyType::RawJson,
            "raw (xml)" => BodyType::RawXml,
            "raw (text)" => BodyType::RawText,
            "multipart/form-data" => BodyType::Multipart,
            _ => BodyType::None,
        }
    }

    /// Returns the Content-Type implied by this body type, if any.
    ///
    /// Multipart returns `None` because its content type carries a boundary
    /// chosen by the executor.
    pub fn implied_content_type(&self) -> Option<&'static str> {
        match self {
            BodyType::FormUrlEncoded => Some("application/x-www-form-urlencoded"),
            BodyType::RawJson => Some("application/json"),
            BodyType::RawXml => Some("application/xml"),
            BodyType::RawText => Some("text/plain"),
            BodyType::None | BodyType::Multipart => None,
        }
    }
}

impl<'de> Deserialize<'de> for BodyType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.map_or(BodyType::None, |l| BodyType::from_label(&l)))
    }
}

/// Rule that copies a value out of a JSON response into the active environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRule {
    /// Environment variable to write (e.g. `access_token`).
    pub variable: String,
    /// Dotted path into the response body (e.g. `data.list[0].id`).
    pub path: String,
}

impl ExtractRule {
    /// Creates a new extraction rule.
    pub fn new(variable: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            path: path.into(),
        }
    }

    /// Returns `true` if both the variable and the path are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.variable.trim().is_empty() && !self.path.trim().is_empty()
    }
}

/// A stored request as edited in the UI.
///
/// Every text field may contain `{{variable}}` placeholders; nothing here is
/// resolved until [`crate::materializer::materialize`] runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTemplate {
    /// Display name of the saved request.
    #[serde(default)]
    pub name: String,

    /// HTTP method as entered by the user.
    pub method: String,

    /// Target URL, possibly without scheme and with placeholders.
    #[serde(default)]
    pub url: String,

    /// Ordered header list. Duplicates are kept.
    #[serde(default)]
    pub headers: Vec<Param>,

    /// Ordered query parameter list, appended to the URL at send time.
    #[serde(default)]
    pub params: Vec<Param>,

    /// Declared body type.
    #[serde(default)]
    pub body_type: BodyType,

    /// Raw body content.
    #[serde(default)]
    pub body: Option<String>,

    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Rules applied to a successful JSON response.
    #[serde(default)]
    pub extract_rules: Vec<ExtractRule>,
}

impl RequestTemplate {
    /// Creates a template with the given method and URL and nothing else.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            params: Vec::new(),
            body_type: BodyType::None,
            body: None,
            auth: AuthConfig::None,
            extract_rules: Vec::new(),
        }
    }

    /// Adds a header.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push(Param::new(name, value));
    }

    /// Adds a query parameter.
    pub fn add_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push(Param::new(name, value));
    }

    /// Sets the body and its declared type.
    pub fn set_body(&mut self, body_type: BodyType, body: impl Into<String>) {
        self.body_type = body_type;
        self.body = Some(body.into());
    }
}

impl From<crate::curl::ParsedCurlRequest> for RequestTemplate {
    /// Copies an imported curl command into a fresh template.
    ///
    /// A captured body is stored as `raw (json)` when it looks like JSON and
    /// `raw (text)` otherwise; the Content-Type header, if any, stays in the
    /// header list so the inferred type never overrides it.
    fn from(parsed: crate::curl::ParsedCurlRequest) -> Self {
        let body_type = match parsed.body.as_deref().map(str::trim_start) {
            Some(b) if b.starts_with('{') || b.starts_with('[') => BodyType::RawJson,
            Some(_) => BodyType::RawText,
            None => BodyType::None,
        };

        Self {
            name: String::new(),
            method: parsed.method,
            url: parsed.url,
            headers: parsed.headers,
            params: Vec::new(),
            body_type,
            body: parsed.body,
            auth: AuthConfig::None,
            extract_rules: Vec::new(),
        }
    }
}

/// The fully resolved request handed to the executor.
///
/// Immutable once built and independent of the template it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializedRequest {
    /// HTTP method, as stored on the template.
    pub method: String,
    /// Resolved URL including the appended query string.
    pub url: String,
    /// Resolved headers, including auth and inferred Content-Type.
    pub headers: Vec<Param>,
    /// Resolved body.
    pub body: Option<String>,
}

impl MaterializedRequest {
    /// Returns the first header with the given name, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Returns `true` if a non-blank body is present.
    pub fn has_body(&self) -> bool {
        self.body.as_ref().map_or(false, |b| !b.trim().is_empty())
    }
}
