//! TikTok: hashtag and storytime filters; strict recency is a URL switch.

use crate::catalog::PlatformId;
use crate::options::AdvancedOptions;
use crate::platform::PlatformClause;

const STORYTIME: &str = " (\"storytime\" OR \"my experience\" OR \"honest review\")";

pub struct TiktokClause;

impl PlatformClause for TiktokClause {
    fn platform_id(&self) -> PlatformId {
        PlatformId::Tiktok
    }

    fn clause(&self, options: &AdvancedOptions) -> String {
        let opts = &options.tiktok;
        let mut token = self.base_clause().to_owned();
        let tag = opts.hashtag.trim().trim_start_matches('#');
        if !tag.is_empty() {
            token.push_str(&format!(" \"#{tag}\""));
        }
        if opts.storytime {
            token.push_str(STORYTIME);
        }
        token
    }

    fn video_recency(&self, options: &AdvancedOptions) -> bool {
        options.tiktok.strict_recency
    }
}
