//! Header name suggestions for autocompletion.
//!
//! A fixed list of common header names plus every custom name the user has
//! actually sent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Header names offered before anything has been recorded.
pub const DEFAULT_HEADER_NAMES: &[&str] = &[
    "Accept",
    "Accept-Charset",
    "Accept-Encoding",
    "Accept-Language",
    "Authorization",
    "Cache-Control",
    "Connection",
    "Content-Length",
    "Content-Type",
    "Cookie",
    "Date",
    "Host",
    "Origin",
    "Pragma",
    "Referer",
    "User-Agent",
    "X-Requested-With",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSuggestions {
    #[serde(default)]
    custom: BTreeSet<String>,
}

impl HeaderSuggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a header name. Blank names and built-in names are ignored.
    ///
    /// Returns true if the name was new.
    pub fn record(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || DEFAULT_HEADER_NAMES.contains(&name) {
            return false;
        }
        self.custom.insert(name.to_string())
    }

    pub fn record_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.record(name.as_ref());
        }
    }

    /// Built-in and recorded names, sorted.
    pub fn all(&self) -> Vec<String> {
        let mut names: BTreeSet<String> =
            DEFAULT_HEADER_NAMES.iter().map(|s| s.to_string()).collect();
        names.extend(self.custom.iter().cloned());
        names.into_iter().collect()
    }

    /// Names starting with `prefix`, ignoring ASCII case.
    pub fn matching(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_ascii_lowercase();
        self.all()
            .into_iter()
            .filter(|name| name.to_ascii_lowercase().starts_with(&prefix))
            .collect()
    }

    pub fn custom(&self) -> impl Iterator<Item = &str> {
        self.custom.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_only() {
        let suggestions = HeaderSuggestions::new();
        assert_eq!(suggestions.all().len(), DEFAULT_HEADER_NAMES.len());
        assert_eq!(suggestions.custom().count(), 0);
    }

    #[test]
    fn test_record_ignores_blank_and_defaults() {
        let mut suggestions = HeaderSuggestions::new();
        assert!(!suggestions.record("  "));
        assert!(!suggestions.record("Content-Type"));
        assert!(suggestions.record("X-Trace-Id"));
        assert!(!suggestions.record("X-Trace-Id"));

        assert_eq!(suggestions.custom().collect::<Vec<_>>(), vec!["X-Trace-Id"]);
    }

    #[test]
    fn test_all_is_sorted_union() {
        let mut suggestions = HeaderSuggestions::new();
        suggestions.record_all(["Z-Last", "A-First"]);

        let all = suggestions.all();
        assert_eq!(all.first().map(String::as_str), Some("A-First"));
        assert_eq!(all.last().map(String::as_str), Some("Z-Last"));
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }

    #[test]
    fn test_matching_prefix() {
        let mut suggestions = HeaderSuggestions::new();
        suggestions.record("X-Api-Key");
        assert_eq!(
            suggestions.matching("x-"),
            vec!["X-Api-Key".to_string(), "X-Requested-With".to_string()]
        );
    }
}
