//! Trait definition for per-platform clause construction.
//!
//! Each site-searchable platform (Reddit, Twitter, LinkedIn, ...) implements
//! [`PlatformClause`] to turn its advanced options into a clause token. Google
//! Trends is not a site search and has no implementation.

use crate::catalog::PlatformId;
use crate::options::AdvancedOptions;
use crate::platforms::{
    DiscordClause, FacebookClause, InstagramClause, LinkedinClause, RedditClause, TiktokClause,
    TwitterClause, YoutubeClause,
};

/// Builds the site-restriction token for one platform.
///
/// Implementations are stateless; everything they need comes from the
/// [`AdvancedOptions`] passed in. Each platform decides for itself whether an
/// option appends to the base clause or replaces it.
pub trait PlatformClause: Send + Sync {
    /// Which platform this implementation represents.
    fn platform_id(&self) -> PlatformId;

    /// Clause used in the combined preview and as the starting point of
    /// [`PlatformClause::clause`]. Defaults to the catalog `site:` clause.
    fn base_clause(&self) -> &'static str {
        self.platform_id().platform().site
    }

    /// Full clause token for dispatch, honouring the platform's options.
    fn clause(&self, options: &AdvancedOptions) -> String;

    /// Whether a Google search for this platform should switch to video
    /// results sorted by date.
    fn video_recency(&self, _options: &AdvancedOptions) -> bool {
        false
    }
}

/// Clause builder for `id`, or `None` for Google Trends.
pub fn clause_for(id: PlatformId) -> Option<&'static dyn PlatformClause> {
    match id {
        PlatformId::Facebook => Some(&FacebookClause),
        PlatformId::Instagram => Some(&InstagramClause),
        PlatformId::Linkedin => Some(&LinkedinClause),
        PlatformId::Reddit => Some(&RedditClause),
        PlatformId::Twitter => Some(&TwitterClause),
        PlatformId::Youtube => Some(&YoutubeClause),
        PlatformId::Tiktok => Some(&TiktokClause),
        PlatformId::Discord => Some(&DiscordClause),
        PlatformId::GoogleTrends => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fixed-output platform for testing the trait defaults.
    struct FixedClause;

    impl PlatformClause for FixedClause {
        fn platform_id(&self) -> PlatformId {
            PlatformId::Facebook
        }

        fn clause(&self, _options: &AdvancedOptions) -> String {
            "site:example.com".into()
        }
    }

    #[test]
    fn fixed_clause_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FixedClause>();
    }

    #[test]
    fn default_base_clause_comes_from_catalog() {
        assert_eq!(FixedClause.base_clause(), "site:facebook.com");
        assert!(!FixedClause.video_recency(&AdvancedOptions::default()));
    }

    #[test]
    fn every_site_platform_has_a_clause() {
        for id in PlatformId::all() {
            match clause_for(id) {
                Some(clause) => assert_eq!(clause.platform_id(), id),
                None => assert_eq!(id, PlatformId::GoogleTrends),
            }
        }
    }
}
