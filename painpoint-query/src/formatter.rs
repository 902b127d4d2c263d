//! Combined preview query shown while the form is being edited.
//!
//! The preview is a simplified composite: it OR-joins every selected
//! platform's base clause with the phrase clause and ignores advanced options
//! and the engine choice. The exact per-platform queries come from
//! [`crate::dispatch`].

use crate::clause::{keywords_clause, phrases_clause, quote};
use crate::form::FormState;
use crate::platform::clause_for;
use crate::types::SearchEngine;

/// Shown instead of a query while the topic is blank.
pub const TOPIC_PLACEHOLDER: &str = "Please enter a main topic to generate a search query";

/// Format the combined preview query for `state`.
///
/// Output shape: `"<topic>"[ AND <keywords>][ (<grouped clause>)]`.
pub fn format_preview_query(state: &FormState) -> String {
    let Some(topic) = state.topic() else {
        return TOPIC_PLACEHOLDER.to_owned();
    };

    let mut query = quote(topic);
    query.push_str(&keywords_clause(&state.additional_keywords, true));

    let site_tokens: Vec<&str> = state
        .platforms()
        .into_iter()
        .filter_map(clause_for)
        .map(|platform| platform.base_clause())
        .collect();
    let phrases = phrases_clause(&state.phrases(), SearchEngine::Google);

    let grouped = [site_tokens.join(" OR "), phrases]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" OR ");

    if !grouped.is_empty() {
        query.push_str(&format!(" ({grouped})"));
    }
    query
}
