//! Topic autocomplete via Google's public suggestion endpoint.
//!
//! The endpoint answers with a JSON array shaped `[query, [s1, s2, ...]]`.
//! Only the second element is used.

use crate::config::SuggestConfig;
use crate::error::QueryError;
use crate::types::Suggestion;
use rand::seq::SliceRandom;
use std::time::Duration;
use url::Url;

/// Snippet attached to every suggestion.
pub const SUGGESTION_SNIPPET: &str = "Popular search suggestion";

/// Browser User-Agents, one picked per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Fetch up to `config.max_suggestions` suggestions for `query`.
///
/// Queries shorter than `config.min_query_chars` return an empty list without
/// touching the network, as does a non-success HTTP status.
///
/// # Errors
///
/// Returns [`QueryError::Config`] for an invalid config,
/// [`QueryError::Http`] if the request fails, and [`QueryError::Parse`] if the
/// body is not the expected JSON shape.
pub async fn fetch_suggestions(
    query: &str,
    config: &SuggestConfig,
) -> Result<Vec<Suggestion>, QueryError> {
    config.validate()?;
    let query = query.trim();
    if query.chars().count() < config.min_query_chars {
        return Ok(Vec::new());
    }

    tracing::trace!(query, "fetching suggestions");
    let client = build_client(config)?;
    let response = client
        .get(suggest_url(query, config)?)
        .send()
        .await
        .map_err(|e| QueryError::Http(format!("suggestion request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%status, "suggestion endpoint returned an error status");
        return Ok(Vec::new());
    }

    let body = response
        .text()
        .await
        .map_err(|e| QueryError::Http(format!("suggestion response read failed: {e}")))?;
    parse_suggestions(&body, config.max_suggestions)
}

/// The request URL: `<endpoint>?client=firefox&q=<query>`.
///
/// # Errors
///
/// Returns [`QueryError::Config`] if the endpoint is not a valid URL.
pub fn suggest_url(query: &str, config: &SuggestConfig) -> Result<Url, QueryError> {
    Url::parse_with_params(&config.endpoint, &[("client", "firefox"), ("q", query)])
        .map_err(|e| QueryError::Config(format!("endpoint is not a valid URL: {e}")))
}

/// Parse a `[query, [suggestions...]]` body, keeping at most `max` entries.
///
/// A body whose second element is missing or not an array yields no
/// suggestions; non-string entries are skipped.
///
/// # Errors
///
/// Returns [`QueryError::Parse`] if the body is not JSON.
pub fn parse_suggestions(body: &str, max: usize) -> Result<Vec<Suggestion>, QueryError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| QueryError::Parse(format!("suggestion body is not JSON: {e}")))?;

    let Some(raw) = value.get(1).and_then(serde_json::Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(raw
        .iter()
        .filter_map(serde_json::Value::as_str)
        .take(max)
        .map(|title| Suggestion {
            title: title.to_owned(),
            snippet: SUGGESTION_SNIPPET.to_owned(),
        })
        .collect())
}

fn build_client(config: &SuggestConfig) -> Result<reqwest::Client, QueryError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .build()
        .map_err(|e| QueryError::Http(format!("failed to build HTTP client: {e}")))
}

fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
