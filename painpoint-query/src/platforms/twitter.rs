//! Twitter: phrase-pattern toggles plus fixed engagement filters.
//!
//! Every toggle appends; the quality filters are always appended last.

use crate::catalog::PlatformId;
use crate::options::AdvancedOptions;
use crate::platform::PlatformClause;

const EMOTIONAL: &str = " (struggling OR frustrated OR \"wish I knew\" OR \"biggest mistake\")";
const COMMUNITY_VALIDATION: &str = " (\"anyone else\" OR \"am I the only one\") min_retweets:5";
const OPINIONS: &str = " (\"unpopular opinion\" OR \"hot take\") min_faves:10";
const RANTS: &str = " (rant OR vent OR frustrated) -filter:links";
const EXPERIENCES: &str = " (\"my experience\" OR \"my journey\") filter:native_video";
const QUALITY: &str = " lang:en -filter:retweets min_replies:3";

pub struct TwitterClause;

impl PlatformClause for TwitterClause {
    fn platform_id(&self) -> PlatformId {
        PlatformId::Twitter
    }

    fn clause(&self, options: &AdvancedOptions) -> String {
        let opts = &options.twitter;
        let toggles = [
            (opts.emotional_content, EMOTIONAL),
            (opts.community_validation, COMMUNITY_VALIDATION),
            (opts.opinions, OPINIONS),
            (opts.rants, RANTS),
            (opts.experiences, EXPERIENCES),
            (opts.verified_only, " filter:verified"),
            (opts.has_media, " filter:media"),
        ];

        let mut token = self.base_clause().to_owned();
        for (_, fragment) in toggles.iter().filter(|(enabled, _)| *enabled) {
            token.push_str(fragment);
        }
        token.push_str(QUALITY);
        token
    }
}
