//! Reddit: restricted to comment and thread pages.
//!
//! A bare `site:reddit.com` mostly returns subreddit landing pages, so the
//! base clause always carries an `inurl:` restriction.

use crate::catalog::PlatformId;
use crate::options::AdvancedOptions;
use crate::platform::PlatformClause;

const BASE: &str = "site:reddit.com (inurl:comments OR inurl:thread)";
const SELF_POSTS_ONLY: &str =
    " -inurl:redd.it -inurl:imgur.com -inurl:youtube.com -inurl:twitter.com";

pub struct RedditClause;

impl PlatformClause for RedditClause {
    fn platform_id(&self) -> PlatformId {
        PlatformId::Reddit
    }

    fn base_clause(&self) -> &'static str {
        BASE
    }

    fn clause(&self, options: &AdvancedOptions) -> String {
        let opts = &options.reddit;
        let mut token = BASE.to_owned();
        if opts.self_posts_only {
            token.push_str(SELF_POSTS_ONLY);
        }
        if opts.min_score {
            token.push_str(&format!(" score:>{}", opts.score_threshold));
        }
        if !opts.author.is_empty() {
            token.push_str(&format!(" author:{}", opts.author));
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_clause_restricts_to_threads() {
        assert_eq!(
            RedditClause.base_clause(),
            "site:reddit.com (inurl:comments OR inurl:thread)"
        );
        assert_eq!(RedditClause.clause(&AdvancedOptions::default()), BASE);
    }

    #[test]
    fn options_append_in_order() {
        let mut options = AdvancedOptions::default();
        options.reddit.self_posts_only = true;
        options.reddit.min_score = true;
        options.reddit.score_threshold = 120;
        options.reddit.author = "spez".into();
        assert_eq!(
            RedditClause.clause(&options),
            "site:reddit.com (inurl:comments OR inurl:thread) -inurl:redd.it -inurl:imgur.com \
             -inurl:youtube.com -inurl:twitter.com score:>120 author:spez"
        );
    }

    #[test]
    fn threshold_ignored_without_min_score() {
        let mut options = AdvancedOptions::default();
        options.reddit.score_threshold = 999;
        assert!(!RedditClause.clause(&options).contains("score:"));
    }

    #[test]
    fn fallback_threshold_is_used() {
        let mut options = AdvancedOptions::default();
        options.reddit.min_score = true;
        options.reddit.set_score_threshold_input("not a number");
        assert!(RedditClause.clause(&options).ends_with(" score:>50"));
    }
}
