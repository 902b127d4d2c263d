//! Per-platform advanced options.
//!
//! Each platform has its own option record. All fields default to off/empty
//! so a form file only needs to mention the toggles it enables.

use serde::{Deserialize, Deserializer, Serialize};

/// Fallback used when the Reddit score threshold is missing or malformed.
pub const DEFAULT_SCORE_THRESHOLD: i64 = 50;

/// Default role for LinkedIn role-based targeting.
pub const DEFAULT_TARGET_ROLE: &str = "CEO";

/// Community focus choices offered for Facebook.
pub const FACEBOOK_COMMUNITY_TYPES: &[&str] = &["support", "community help", "beginners", "newbies"];

/// Advanced options for every platform that has them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedOptions {
    pub facebook: FacebookOptions,
    pub reddit: RedditOptions,
    pub twitter: TwitterOptions,
    pub instagram: InstagramOptions,
    pub linkedin: LinkedinOptions,
    pub youtube: YoutubeOptions,
    pub tiktok: TiktokOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacebookOptions {
    /// Restrict to one group (`inurl:groups/<id>`).
    pub group_id: String,
    pub public_posts_only: bool,
    /// Community focus terms, OR-joined as quoted phrases.
    pub community_type: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditOptions {
    /// Exclude link posts to image/video/tweet hosts.
    pub self_posts_only: bool,
    /// Append `score:>N` using [`RedditOptions::score_threshold`].
    pub min_score: bool,
    #[serde(deserialize_with = "deserialize_score_threshold")]
    pub score_threshold: i64,
    pub author: String,
}

impl Default for RedditOptions {
    fn default() -> Self {
        Self {
            self_posts_only: false,
            min_score: false,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            author: String::new(),
        }
    }
}

impl RedditOptions {
    /// Set the score threshold from raw text input.
    ///
    /// Non-numeric input and zero fall back to [`DEFAULT_SCORE_THRESHOLD`].
    pub fn set_score_threshold_input(&mut self, raw: &str) {
        self.score_threshold = parse_score_threshold(raw);
    }
}

/// Parse a leading integer the way a lenient number field does: leading
/// whitespace, an optional sign, then digits; anything after is ignored.
/// Returns [`DEFAULT_SCORE_THRESHOLD`] when no digits are found or the value
/// is zero.
pub fn parse_score_threshold(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let value = match digits.parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) => return DEFAULT_SCORE_THRESHOLD,
    };
    if value == 0 {
        DEFAULT_SCORE_THRESHOLD
    } else {
        value
    }
}

fn deserialize_score_threshold<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawThreshold {
        Number(i64),
        Float(f64),
        Text(String),
    }

    Ok(match RawThreshold::deserialize(deserializer)? {
        RawThreshold::Number(0) => DEFAULT_SCORE_THRESHOLD,
        RawThreshold::Number(n) => n,
        RawThreshold::Float(f) => parse_score_threshold(&f.to_string()),
        RawThreshold::Text(text) => parse_score_threshold(&text),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterOptions {
    pub verified_only: bool,
    pub has_media: bool,
    pub emotional_content: bool,
    pub community_validation: bool,
    pub opinions: bool,
    pub rants: bool,
    pub experiences: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstagramOptions {
    pub link_in_bio: bool,
    pub swipe_up: bool,
    /// Replaces the whole clause with a reels-only search.
    pub reels_only: bool,
}

/// LinkedIn sub-modes. The first enabled mode replaces the base clause;
/// later modes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedinOptions {
    pub public_posts: bool,
    pub pulse_articles: bool,
    pub company_posts: bool,
    pub industry_specific: bool,
    pub role_based: bool,
    pub target_role: String,
}

impl Default for LinkedinOptions {
    fn default() -> Self {
        Self {
            public_posts: false,
            pulse_articles: false,
            company_posts: false,
            industry_specific: false,
            role_based: false,
            target_role: DEFAULT_TARGET_ROLE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeOptions {
    pub comments_search: bool,
    pub video_content: bool,
    pub channel_specific: bool,
    pub video_reactions: bool,
    pub tutorial_feedback: bool,
    pub product_reviews: bool,
    pub long_term_reviews: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiktokOptions {
    /// Hashtag to require, with or without the leading `#`.
    pub hashtag: String,
    pub storytime: bool,
    /// On Google, switch to video search sorted by date.
    pub strict_recency: bool,
}
