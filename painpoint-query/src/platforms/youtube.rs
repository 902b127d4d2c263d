//! YouTube: comment phrases, page-type replacements, and reaction groups.
//!
//! Order matters: `comments_search` appends, then `video_content` and
//! `channel_specific` replace everything built so far, then the reaction
//! groups append to whatever remains.

use crate::catalog::PlatformId;
use crate::options::AdvancedOptions;
use crate::platform::PlatformClause;

const COMMENTS: &str = " intext:(\"I tried this\" OR \"this helped me\" OR \"I struggled with\" OR \"my experience\")";
const VIDEO_CONTENT: &str = "site:youtube.com/watch (\"review\" OR \"experience\" OR \"problems\" OR \"issues\" OR \"struggles\")";
const CHANNEL_SPECIFIC: &str =
    "site:youtube.com site:youtube.com/c/ (\"honest review\" OR \"my thoughts\" OR \"problems with\")";
const VIDEO_REACTIONS: &str = " (\"this saved my life\" OR \"game changer\" OR \"waste of money\" OR \"don't buy this\" OR \"total scam\")";
const TUTORIAL_FEEDBACK: &str = " (\"this didn't work for me\" OR \"finally something that works\" OR \"I tried everything\" OR \"this is the only thing\")";
const PRODUCT_REVIEWS: &str = " (\"after 6 months of using\" OR \"honest opinion\" OR \"pros and cons\" OR \"before you buy\")";
const LONG_TERM_REVIEWS: &str = " (\"long term review\" OR \"6 month update\" OR \"1 year later\")";

pub struct YoutubeClause;

impl PlatformClause for YoutubeClause {
    fn platform_id(&self) -> PlatformId {
        PlatformId::Youtube
    }

    fn clause(&self, options: &AdvancedOptions) -> String {
        let opts = &options.youtube;
        let mut token = self.base_clause().to_owned();
        if opts.comments_search {
            token.push_str(COMMENTS);
        }
        if opts.video_content {
            token = VIDEO_CONTENT.to_owned();
        }
        if opts.channel_specific {
            token = CHANNEL_SPECIFIC.to_owned();
        }
        let appended = [
            (opts.video_reactions, VIDEO_REACTIONS),
            (opts.tutorial_feedback, TUTORIAL_FEEDBACK),
            (opts.product_reviews, PRODUCT_REVIEWS),
            (opts.long_term_reviews, LONG_TERM_REVIEWS),
        ];
        for (_, fragment) in appended.iter().filter(|(enabled, _)| *enabled) {
            token.push_str(fragment);
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_search_appends() {
        let mut options = AdvancedOptions::default();
        options.youtube.comments_search = true;
        assert_eq!(
            YoutubeClause.clause(&options),
            format!("site:youtube.com{COMMENTS}")
        );
    }

    #[test]
    fn video_content_replaces_comments() {
        let mut options = AdvancedOptions::default();
        options.youtube.comments_search = true;
        options.youtube.video_content = true;
        assert_eq!(YoutubeClause.clause(&options), VIDEO_CONTENT);
    }

    #[test]
    fn channel_specific_wins_over_video_content() {
        let mut options = AdvancedOptions::default();
        options.youtube.video_content = true;
        options.youtube.channel_specific = true;
        assert_eq!(YoutubeClause.clause(&options), CHANNEL_SPECIFIC);
    }

    #[test]
    fn reactions_append_after_replacement() {
        let mut options = AdvancedOptions::default();
        options.youtube.video_content = true;
        options.youtube.long_term_reviews = true;
        options.youtube.video_reactions = true;
        assert_eq!(
            YoutubeClause.clause(&options),
            format!("{VIDEO_CONTENT}{VIDEO_REACTIONS}{LONG_TERM_REVIEWS}")
        );
    }
}
