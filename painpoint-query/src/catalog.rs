//! Static platform catalog.
//!
//! Every searchable target has a stable kebab-case id, a display name, and a
//! base `site:` clause. Google Trends has no site clause; it is dispatched as
//! its own URL family.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a searchable platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformId {
    Facebook,
    Instagram,
    Linkedin,
    Reddit,
    Twitter,
    Youtube,
    Tiktok,
    Discord,
    GoogleTrends,
}

impl PlatformId {
    /// Stable id as used in form files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Reddit => "reddit",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::Discord => "discord",
            Self::GoogleTrends => "google-trends",
        }
    }

    /// Catalog entry for this id.
    pub fn platform(&self) -> &'static Platform {
        // PLATFORMS holds exactly one entry per variant, in declaration order.
        &PLATFORMS[*self as usize]
    }

    /// Returns all platform ids in catalog order.
    pub fn all() -> impl Iterator<Item = PlatformId> {
        PLATFORMS.iter().map(|p| p.id)
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PLATFORMS
            .iter()
            .find(|p| p.id.as_str() == wanted)
            .map(|p| p.id)
            .ok_or_else(|| QueryError::UnknownPlatform(s.to_owned()))
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub id: PlatformId,
    pub name: &'static str,
    /// Base `site:` clause; empty for Google Trends.
    pub site: &'static str,
}

/// The platform catalog, in UI order.
pub const PLATFORMS: &[Platform] = &[
    Platform {
        id: PlatformId::Facebook,
        name: "Facebook",
        site: "site:facebook.com",
    },
    Platform {
        id: PlatformId::Instagram,
        name: "Instagram",
        site: "site:instagram.com",
    },
    Platform {
        id: PlatformId::Linkedin,
        name: "LinkedIn",
        site: "site:linkedin.com",
    },
    Platform {
        id: PlatformId::Reddit,
        name: "Reddit",
        site: "site:reddit.com",
    },
    Platform {
        id: PlatformId::Twitter,
        name: "Twitter",
        site: "site:twitter.com",
    },
    Platform {
        id: PlatformId::Youtube,
        name: "YouTube",
        site: "site:youtube.com",
    },
    Platform {
        id: PlatformId::Tiktok,
        name: "TikTok",
        site: "site:tiktok.com",
    },
    Platform {
        id: PlatformId::Discord,
        name: "Discord",
        site: "site:discord.com OR site:discord.gg OR site:disboard.org",
    },
    Platform {
        id: PlatformId::GoogleTrends,
        name: "Google Trends",
        site: "",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_index_matches_variant_order() {
        for (index, platform) in PLATFORMS.iter().enumerate() {
            assert_eq!(platform.id as usize, index, "{} out of order", platform.name);
            assert_eq!(platform.id.platform(), platform);
        }
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for id in PlatformId::all() {
            let parsed: PlatformId = id.as_str().parse().expect("parse");
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "myspace".parse::<PlatformId>().unwrap_err();
        assert!(err.to_string().contains("myspace"));
    }

    #[test]
    fn google_trends_has_no_site_clause() {
        assert!(PlatformId::GoogleTrends.platform().site.is_empty());
        assert_eq!(PlatformId::GoogleTrends.as_str(), "google-trends");
    }

    #[test]
    fn serde_uses_kebab_case_ids() {
        let json = serde_json::to_string(&PlatformId::GoogleTrends).expect("serialize");
        assert_eq!(json, "\"google-trends\"");
        let decoded: PlatformId = serde_json::from_str("\"linkedin\"").expect("deserialize");
        assert_eq!(decoded, PlatformId::Linkedin);
    }

    #[test]
    fn display_names() {
        assert_eq!(PlatformId::Linkedin.platform().name, "LinkedIn");
        assert_eq!(PlatformId::Youtube.platform().name, "YouTube");
        assert_eq!(PlatformId::Tiktok.platform().name, "TikTok");
    }
}
