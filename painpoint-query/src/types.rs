//! Core types: search engines, time filters, and dispatched search links.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search engines a query can be dispatched to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// Google: supports `intext:`, `tbs` time ranges, and video search mode.
    #[default]
    Google,
    /// DuckDuckGo: plain quoted phrases, percent-encoded query.
    DuckDuckGo,
    /// Bing: plain quoted phrases, percent-encoded query.
    Bing,
}

impl SearchEngine {
    /// Stable lowercase identifier used in config files and notices.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::DuckDuckGo => "duckduckgo",
            Self::Bing => "bing",
        }
    }

    /// Returns the human-readable name of this engine.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
        }
    }

    /// Search URL prefix; the query string is appended directly.
    pub fn search_base(&self) -> &'static str {
        match self {
            Self::Google => "https://www.google.com/search?q=",
            Self::DuckDuckGo => "https://duckduckgo.com/?q=",
            Self::Bing => "https://www.bing.com/search?q=",
        }
    }

    /// Whether the engine understands Google's `intext:` operator.
    pub fn supports_intext(&self) -> bool {
        matches!(self, Self::Google)
    }

    /// Returns all available engine variants.
    pub fn all() -> &'static [SearchEngine] {
        &[Self::Google, Self::DuckDuckGo, Self::Bing]
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchEngine {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|engine| engine.id() == wanted)
            .ok_or_else(|| QueryError::Parse(format!("unknown search engine: {s}")))
    }
}

/// Recency window applied to Google searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    /// No time restriction.
    #[default]
    Any,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeFilter {
    /// Stable lowercase identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Google `tbs=qdr:` code, or `None` for [`TimeFilter::Any`].
    pub fn qdr_code(&self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Hour => Some("h"),
            Self::Day => Some("d"),
            Self::Week => Some("w"),
            Self::Month => Some("m"),
            Self::Year => Some("y"),
        }
    }

    /// Returns all filter variants in UI order.
    pub fn all() -> &'static [TimeFilter] {
        &[
            Self::Any,
            Self::Hour,
            Self::Day,
            Self::Week,
            Self::Month,
            Self::Year,
        ]
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TimeFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|filter| filter.id() == wanted)
            .ok_or_else(|| QueryError::Parse(format!("unknown time filter: {s}")))
    }
}

/// One dispatched search, kept for the fallback link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultLink {
    /// Display name of the platform (e.g. `Reddit`).
    pub platform_name: String,
    /// Fully-formed URL that was (or would have been) opened.
    pub url: String,
    /// The query as dispatched, before URL encoding.
    pub display_query: String,
}

/// A single autocomplete suggestion for the topic field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub snippet: String,
}
