//! Per-platform query and URL construction.
//!
//! Unlike the preview, each platform gets its own query built from its full
//! option-driven clause, combined according to the engine's grammar.

use crate::catalog::PlatformId;
use crate::clause::{keywords_clause, phrases_clause, quote};
use crate::encode::engine_url;
use crate::form::FormState;
use crate::platform::{clause_for, PlatformClause};
use crate::trends::{trends_display, trends_url};
use crate::types::SearchResultLink;

/// The query dispatched for one site-searchable platform.
///
/// - Google: `"<topic>"<keywords> (<platform clause> intext:(<phrases>))`
/// - DuckDuckGo/Bing: `"<topic>"<keywords> (<platform clause> (<phrases>))`,
///   with no `intext:` anywhere in the keyword or phrase parts.
///
/// The platform and phrase parts are always parenthesised so an `OR` inside
/// a platform clause stays scoped to the topic.
pub fn platform_query(state: &FormState, topic: &str, platform: &dyn PlatformClause) -> String {
    let engine = state.search_engine;
    let intext = engine.supports_intext();

    let mut query = quote(topic);
    query.push_str(&keywords_clause(&state.additional_keywords, intext));

    let platform_token = platform.clause(&state.advanced_options);
    let phrases_token = phrases_clause(&state.phrases(), engine);
    let parts: Vec<&str> = [platform_token.as_str(), phrases_token.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return query;
    }

    query.push_str(&format!(" ({})", parts.join(" ")));
    query
}

/// Build the link for platform `id`, given the already-trimmed `topic`.
pub fn build_link(state: &FormState, topic: &str, id: PlatformId) -> SearchResultLink {
    let platform_name = id.platform().name.to_owned();

    let Some(platform) = clause_for(id) else {
        return SearchResultLink {
            platform_name,
            url: trends_url(topic, &state.trends_category),
            display_query: trends_display(topic, &state.trends_category),
        };
    };

    let query = platform_query(state, topic, platform);
    let url = engine_url(
        state.search_engine,
        &query,
        state.time_filter,
        platform.video_recency(&state.advanced_options),
    );
    SearchResultLink {
        platform_name,
        url,
        display_query: query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platforms::{DiscordClause, RedditClause, TiktokClause, TwitterClause};
    use crate::types::{SearchEngine, TimeFilter};

    fn state(topic: &str, engine: SearchEngine) -> FormState {
        FormState {
            search_engine: engine,
            ..FormState::with_topic(topic)
        }
    }

    #[test]
    fn google_groups_platform_and_phrases() {
        let mut form = state("meal planning apps", SearchEngine::Google);
        form.toggle_phrase("pain point");
        assert_eq!(
            platform_query(&form, "meal planning apps", &RedditClause),
            "\"meal planning apps\" (site:reddit.com (inurl:comments OR inurl:thread) intext:(\"pain point\"))"
        );
    }

    #[test]
    fn google_without_phrases_still_parenthesises_platform() {
        let form = state("crm", SearchEngine::Google);
        assert_eq!(
            platform_query(&form, "crm", &RedditClause),
            "\"crm\" (site:reddit.com (inurl:comments OR inurl:thread))"
        );
    }

    #[test]
    fn non_google_quotes_phrases_without_intext() {
        let mut form = state("crm", SearchEngine::DuckDuckGo);
        form.toggle_phrase("I think");
        form.toggle_phrase("IMO");
        form.additional_keywords = "\"small team\" \"startup\"".into();
        assert_eq!(
            platform_query(&form, "crm", &TwitterClause),
            "\"crm\" AND (\"small team\" OR \"startup\") (site:twitter.com lang:en -filter:retweets \
             min_replies:3 (\"I think\" OR \"IMO\"))"
        );
    }

    #[test]
    fn discord_alternatives_stay_scoped_to_topic() {
        for engine in [SearchEngine::Bing, SearchEngine::DuckDuckGo] {
            let mut form = state("crm", engine);
            form.toggle_phrase("IMO");
            assert_eq!(
                platform_query(&form, "crm", &DiscordClause),
                "\"crm\" (site:discord.com OR site:discord.gg OR site:disboard.org (\"IMO\"))"
            );
        }
    }

    #[test]
    fn google_keywords_use_intext() {
        let mut form = state("crm", SearchEngine::Google);
        form.additional_keywords = "pricing".into();
        assert!(platform_query(&form, "crm", &RedditClause).starts_with("\"crm\" AND intext:\"pricing\" ("));
    }

    #[test]
    fn trends_link_ignores_engine_phrases_and_time() {
        let mut form = state("fitness apps", SearchEngine::Bing);
        form.time_filter = TimeFilter::Week;
        form.toggle_phrase("IMO");
        form.trends_category = "45".into();
        let link = build_link(&form, "fitness apps", PlatformId::GoogleTrends);
        assert_eq!(link.platform_name, "Google Trends");
        assert_eq!(
            link.url,
            "https://trends.google.com/trends/explore?date=all&q=fitness%20apps&cat=45&hl=en"
        );
        assert_eq!(link.display_query, "Google Trends: fitness apps (Health)");
    }

    #[test]
    fn tiktok_strict_recency_switches_google_to_video() {
        let mut form = state("meal prep", SearchEngine::Google);
        form.time_filter = TimeFilter::Month;
        form.advanced_options.tiktok.strict_recency = true;
        let link = build_link(&form, "meal prep", PlatformId::Tiktok);
        assert!(link.url.ends_with("&tbs=qdr:m&tbm=vid&sbd=1"));
        assert_eq!(link.display_query, platform_query(&form, "meal prep", &TiktokClause));
    }

    #[test]
    fn tiktok_strict_recency_ignored_off_google() {
        let mut form = state("meal prep", SearchEngine::DuckDuckGo);
        form.advanced_options.tiktok.strict_recency = true;
        let link = build_link(&form, "meal prep", PlatformId::Tiktok);
        assert!(!link.url.contains("tbm=vid"));
        assert!(link.url.starts_with("https://duckduckgo.com/?q=%22meal%20prep%22"));
    }
}
