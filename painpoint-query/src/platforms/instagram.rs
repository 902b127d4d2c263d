//! Instagram: caption-phrase toggles, or a reels-only replacement.

use crate::catalog::PlatformId;
use crate::options::AdvancedOptions;
use crate::platform::PlatformClause;

const LINK_IN_BIO: &str = " intext:\"link in bio\" (\"struggling\" OR \"journey\" OR \"help\")";
const SWIPE_UP: &str = " intext:\"swipe up\" (\"honest\" OR \"real\" OR \"truth\")";
const REELS_ONLY: &str =
    "site:instagram.com/reel (\"anyone else\" OR \"am I the only one\" OR \"struggle\")";

pub struct InstagramClause;

impl PlatformClause for InstagramClause {
    fn platform_id(&self) -> PlatformId {
        PlatformId::Instagram
    }

    fn clause(&self, options: &AdvancedOptions) -> String {
        let opts = &options.instagram;
        if opts.reels_only {
            return REELS_ONLY.to_owned();
        }
        let mut token = self.base_clause().to_owned();
        if opts.link_in_bio {
            token.push_str(LINK_IN_BIO);
        }
        if opts.swipe_up {
            token.push_str(SWIPE_UP);
        }
        token
    }
}
