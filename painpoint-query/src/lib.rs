//! # painpoint-query
//!
//! Query assembly for social-media pain point research.
//!
//! Given a [`FormState`] (topic, keywords, platforms, phrases, per-platform
//! advanced options, engine, time filter) this crate produces:
//!
//! - a combined preview query ([`format_preview_query`]), and
//! - one query and URL per selected platform ([`build_searches`]), opened
//!   through an injectable [`TabOpener`] by [`build_and_open_searches`].
//!
//! ## Design
//!
//! - Everything except [`fetch_suggestions`] is pure and synchronous
//! - Each platform's clause rules live in their own [`PlatformClause`] impl
//! - Engine quirks (`intext:`, `+` vs percent-encoding, `tbs` time ranges)
//!   are confined to [`clause`] and [`encode`]
//! - Query text is logged only at trace level

pub mod catalog;
pub mod clause;
pub mod config;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod form;
pub mod formatter;
pub mod options;
pub mod phrases;
pub mod platform;
pub mod platforms;
pub mod suggest;
pub mod trends;
pub mod types;

pub use catalog::{Platform, PlatformId, PLATFORMS};
pub use config::SuggestConfig;
pub use dispatch::search::{build_and_open_searches, build_searches, Notice, SearchDispatch, TabOpener};
pub use error::{QueryError, Result};
pub use form::FormState;
pub use formatter::{format_preview_query, TOPIC_PLACEHOLDER};
pub use options::AdvancedOptions;
pub use platform::PlatformClause;
pub use suggest::fetch_suggestions;
pub use types::{SearchEngine, SearchResultLink, Suggestion, TimeFilter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexports_cover_the_form_to_links_path() {
        let mut form = FormState::with_topic("invoicing software");
        form.toggle_platform(PlatformId::Reddit);
        assert!(format_preview_query(&form).starts_with("\"invoicing software\""));
        let links = build_searches(&form).expect("links");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].platform_name, "Reddit");
    }

    #[tokio::test]
    async fn suggestions_validate_config() {
        let config = SuggestConfig {
            max_suggestions: 0,
            ..Default::default()
        };
        let result = fetch_suggestions("test", &config).await;
        assert!(result.unwrap_err().to_string().contains("max_suggestions"));
    }
}
