//! Per-platform clause builders.
//!
//! Each module provides a unit struct implementing
//! [`crate::platform::PlatformClause`] for one platform.

pub mod discord;
pub mod facebook;
pub mod instagram;
pub mod linkedin;
pub mod reddit;
pub mod tiktok;
pub mod twitter;
pub mod youtube;

pub use discord::DiscordClause;
pub use facebook::FacebookClause;
pub use instagram::InstagramClause;
pub use linkedin::LinkedinClause;
pub use reddit::RedditClause;
pub use tiktok::TiktokClause;
pub use twitter::TwitterClause;
pub use youtube::YoutubeClause;
