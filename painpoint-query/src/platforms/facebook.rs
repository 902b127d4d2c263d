//! Facebook: optional group, public-post, and community-focus filters.

use crate::catalog::PlatformId;
use crate::clause::quote;
use crate::options::AdvancedOptions;
use crate::platform::PlatformClause;

pub struct FacebookClause;

impl PlatformClause for FacebookClause {
    fn platform_id(&self) -> PlatformId {
        PlatformId::Facebook
    }

    fn clause(&self, options: &AdvancedOptions) -> String {
        let opts = &options.facebook;
        let mut token = self.base_clause().to_owned();
        if !opts.group_id.is_empty() {
            token.push_str(&format!(" inurl:groups/{}", opts.group_id));
        }
        if opts.public_posts_only {
            token.push_str(" inurl:posts");
        }
        if !opts.community_type.is_empty() {
            // OR-joined inside one group, without a surrounding intext:.
            let terms = opts
                .community_type
                .iter()
                .map(|t| quote(t))
                .collect::<Vec<_>>()
                .join(" OR ");
            token.push_str(&format!(" ({terms})"));
        }
        token
    }
}
