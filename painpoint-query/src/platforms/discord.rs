//! Discord: public server pages and the Disboard directory. No options.

use crate::catalog::PlatformId;
use crate::options::AdvancedOptions;
use crate::platform::PlatformClause;

pub struct DiscordClause;

impl PlatformClause for DiscordClause {
    fn platform_id(&self) -> PlatformId {
        PlatformId::Discord
    }

    fn clause(&self, _options: &AdvancedOptions) -> String {
        self.base_clause().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_covers_all_discord_hosts() {
        assert_eq!(
            DiscordClause.clause(&AdvancedOptions::default()),
            "site:discord.com OR site:discord.gg OR site:disboard.org"
        );
    }
}
