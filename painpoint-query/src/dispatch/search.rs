//! Search dispatch: validate, build one link per platform, open each one.

use crate::error::QueryError;
use crate::form::FormState;
use crate::types::SearchResultLink;

use super::query::build_link;

const MISSING_INFO_TITLE: &str = "Missing info";
const MISSING_INFO_DESCRIPTION: &str =
    "Please enter a main topic and select at least one platform.";

/// Opens a URL in a new browsing context.
///
/// Opening is fire-and-forget: an `Err` means the context could not be
/// created (e.g. a blocked popup or a missing launcher). The dispatcher logs
/// it and keeps going.
pub trait TabOpener {
    /// Open `url`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Open`] if the URL could not be opened.
    fn open(&self, url: &str) -> Result<(), QueryError>;
}

/// A short user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// Outcome of one search action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDispatch {
    /// One link per processed platform, in selection order. Empty when the
    /// form failed validation.
    pub links: Vec<SearchResultLink>,
    pub notice: Notice,
}

/// Build the link for every selected platform without opening anything.
///
/// # Errors
///
/// Returns [`QueryError::Validation`] if the topic is blank or no platform
/// is selected.
pub fn build_searches(state: &FormState) -> Result<Vec<SearchResultLink>, QueryError> {
    let platforms = state.platforms();
    let topic = match state.topic() {
        Some(topic) if !platforms.is_empty() => topic,
        _ => return Err(QueryError::Validation(MISSING_INFO_DESCRIPTION.into())),
    };

    let links = platforms
        .into_iter()
        .map(|id| {
            let link = build_link(state, topic, id);
            tracing::debug!(platform = %id, engine = %state.search_engine, "built search link");
            tracing::trace!(url = %link.url, "search url");
            link
        })
        .collect();
    Ok(links)
}

/// Build every platform's link and open each one through `opener`.
///
/// Validation failures produce a "Missing info" notice, no links, and no
/// opened tabs. A failing open is logged and does not stop the remaining
/// platforms; its link is still returned for the fallback list.
pub fn build_and_open_searches(state: &FormState, opener: &dyn TabOpener) -> SearchDispatch {
    let links = match build_searches(state) {
        Ok(links) => links,
        Err(err) => {
            tracing::info!(error = %err, "search not dispatched");
            return SearchDispatch {
                links: Vec::new(),
                notice: Notice {
                    title: MISSING_INFO_TITLE.into(),
                    description: MISSING_INFO_DESCRIPTION.into(),
                },
            };
        }
    };

    for link in &links {
        if let Err(err) = opener.open(&link.url) {
            tracing::warn!(platform = %link.platform_name, error = %err, "failed to open search tab");
        }
    }

    let count = links.len();
    let engine = state.search_engine.id();
    let plural = if count == 1 { "" } else { "s" };
    tracing::info!(count, engine, "search initiated");

    SearchDispatch {
        links,
        notice: Notice {
            title: "Search initiated".into(),
            description: format!("Opening {count} {engine} tab{plural}"),
        },
    }
}
