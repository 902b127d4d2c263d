//! LinkedIn: sub-modes replace the base clause; the first enabled mode wins.

use crate::catalog::PlatformId;
use crate::options::AdvancedOptions;
use crate::platform::PlatformClause;

const PUBLIC_POSTS: &str = "site:linkedin.com/posts (\"I struggled with\" OR \"my experience\" OR \"I learned\" OR \"pain point\" OR \"challenge\")";
const PULSE_ARTICLES: &str = "site:linkedin.com/pulse (\"I think\" OR \"my opinion\" OR \"I found that\" OR \"biggest challenge\")";
const COMPANY_POSTS: &str = "site:linkedin.com/company (\"feedback\" OR \"review\" OR \"experience\" OR \"struggled\")";
const INDUSTRY_SPECIFIC: &str = "site:linkedin.com (\"I wish\" OR \"frustration\" OR \"pain point\" OR \"challenge\" OR \"struggled\")";

pub struct LinkedinClause;

impl PlatformClause for LinkedinClause {
    fn platform_id(&self) -> PlatformId {
        PlatformId::Linkedin
    }

    fn clause(&self, options: &AdvancedOptions) -> String {
        let opts = &options.linkedin;
        if opts.public_posts {
            PUBLIC_POSTS.to_owned()
        } else if opts.pulse_articles {
            PULSE_ARTICLES.to_owned()
        } else if opts.company_posts {
            COMPANY_POSTS.to_owned()
        } else if opts.industry_specific {
            INDUSTRY_SPECIFIC.to_owned()
        } else if opts.role_based {
            format!(
                "site:linkedin.com (\"{}\" OR \"founder\" OR \"marketing manager\") \"biggest challenge\"",
                opts.target_role
            )
        } else {
            self.base_clause().to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_mode_is_bare_site() {
        assert_eq!(
            LinkedinClause.clause(&AdvancedOptions::default()),
            "site:linkedin.com"
        );
    }

    #[test]
    fn first_enabled_mode_replaces_base() {
        let mut options = AdvancedOptions::default();
        options.linkedin.company_posts = true;
        options.linkedin.role_based = true;
        assert_eq!(LinkedinClause.clause(&options), COMPANY_POSTS);

        options.linkedin.public_posts = true;
        assert_eq!(LinkedinClause.clause(&options), PUBLIC_POSTS);
    }

    #[test]
    fn role_based_uses_target_role() {
        let mut options = AdvancedOptions::default();
        options.linkedin.role_based = true;
        assert_eq!(
            LinkedinClause.clause(&options),
            "site:linkedin.com (\"CEO\" OR \"founder\" OR \"marketing manager\") \"biggest challenge\""
        );
        options.linkedin.target_role = "CTO".into();
        assert!(LinkedinClause.clause(&options).contains("(\"CTO\" OR"));
    }

    #[test]
    fn pulse_and_industry_modes() {
        let mut options = AdvancedOptions::default();
        options.linkedin.pulse_articles = true;
        assert!(LinkedinClause.clause(&options).starts_with("site:linkedin.com/pulse "));
        options.linkedin.pulse_articles = false;
        options.linkedin.industry_specific = true;
        assert_eq!(LinkedinClause.clause(&options), INDUSTRY_SPECIFIC);
    }
}
