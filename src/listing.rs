//! Text listings of the static tables, as printed by the CLI.

use painpoint_query::options::FACEBOOK_COMMUNITY_TYPES;
use painpoint_query::phrases::{PHRASE_CATEGORIES, PRESETS};
use painpoint_query::trends::TRENDS_CATEGORIES;
use painpoint_query::{PLATFORMS, PlatformId};

/// One line per platform: id, name and base clause. Facebook is followed by
/// its community-focus choices.
pub fn platform_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(PLATFORMS.len() + 1);
    for platform in PLATFORMS {
        let site = if platform.site.is_empty() {
            "(trends explore)"
        } else {
            platform.site
        };
        lines.push(format!(
            "{:<14} {:<12} {site}",
            platform.id.as_str(),
            platform.name
        ));
        if platform.id == PlatformId::Facebook {
            lines.push(format!(
                "  community types: {}",
                FACEBOOK_COMMUNITY_TYPES.join(", ")
            ));
        }
    }
    lines
}

/// Presets, a blank line, then phrase categories with their sizes.
pub fn preset_lines() -> Vec<String> {
    let mut lines = vec!["Presets:".to_owned()];
    for preset in PRESETS {
        lines.push(format!(
            "  {:<20} {}: {}",
            preset.id, preset.name, preset.description
        ));
    }
    lines.push(String::new());
    lines.push("Phrase categories:".to_owned());
    for category in PHRASE_CATEGORIES {
        lines.push(format!(
            "  {} ({} phrases)",
            category.title,
            category.phrases.len()
        ));
    }
    lines
}

/// One line per Google Trends category, id right-aligned.
pub fn trends_category_lines() -> Vec<String> {
    TRENDS_CATEGORIES
        .iter()
        .map(|category| format!("{:>5}  {}", category.id, category.name))
        .collect()
}
