//! Suggestion client configuration with sensible defaults.
//!
//! [`SuggestConfig`] controls where topic suggestions are fetched from, how
//! long to wait, and how many are kept.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};

/// Google's public autocomplete endpoint (Firefox JSON flavour).
pub const DEFAULT_SUGGEST_ENDPOINT: &str = "https://suggestqueries.google.com/complete/search";

/// Configuration for topic suggestion lookups.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Autocomplete endpoint; `client` and `q` parameters are appended.
    pub endpoint: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
    /// Queries shorter than this (in characters) are not sent.
    pub min_query_chars: usize,
    /// Custom User-Agent string. If `None`, rotates through a built-in list.
    pub user_agent: Option<String>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUGGEST_ENDPOINT.to_owned(),
            timeout_seconds: 5,
            max_suggestions: 5,
            min_query_chars: 2,
            user_agent: None,
        }
    }
}

impl SuggestConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `endpoint` must be an absolute http(s) URL
    /// - `timeout_seconds` must be greater than 0
    /// - `max_suggestions` must be greater than 0
    pub fn validate(&self) -> Result<(), QueryError> {
        let endpoint = url::Url::parse(&self.endpoint)
            .map_err(|e| QueryError::Config(format!("endpoint is not a valid URL: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(QueryError::Config(
                "endpoint must use http or https".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(QueryError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_suggestions == 0 {
            return Err(QueryError::Config(
                "max_suggestions must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
