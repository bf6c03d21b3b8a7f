//! API keys sent either as a header or as a query parameter.

use serde::{Deserialize, Serialize};

/// Where an API key goes on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiKeyLocation {
    #[default]
    Header,
    Query,
}

impl ApiKeyLocation {
    /// Reads the stored `where` field. Only the exact text `Header` selects
    /// the header; anything else means the query string.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.unwrap_or("Header") {
            "Header" => ApiKeyLocation::Header,
            _ => ApiKeyLocation::Query,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ApiKeyLocation::Header => "Header",
            ApiKeyLocation::Query => "Query Params",
        }
    }
}
