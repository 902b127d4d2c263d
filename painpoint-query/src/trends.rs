//! Google Trends explore URLs.
//!
//! Trends is not a site search: the URL carries only the topic and an
//! optional category, and ignores phrases, engine, and time filter.

use crate::encode::encode_uri_component;

/// Category id meaning "no category restriction".
pub const ALL_CATEGORIES_ID: &str = "0";

const TRENDS_EXPLORE: &str = "https://trends.google.com/trends/explore?date=all&q=";

/// A Google Trends category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendsCategory {
    pub id: &'static str,
    pub name: &'static str,
}

pub const TRENDS_CATEGORIES: &[TrendsCategory] = &[
    TrendsCategory { id: "0", name: "All Categories" },
    TrendsCategory { id: "3", name: "Arts & Entertainment" },
    TrendsCategory { id: "5", name: "Computers & Electronics" },
    TrendsCategory { id: "7", name: "Finance" },
    TrendsCategory { id: "8", name: "Games" },
    TrendsCategory { id: "11", name: "Home & Garden" },
    TrendsCategory { id: "12", name: "Internet & Telecom" },
    TrendsCategory { id: "13", name: "Jobs & Education" },
    TrendsCategory { id: "14", name: "Law & Government" },
    TrendsCategory { id: "16", name: "News" },
    TrendsCategory { id: "17", name: "Online Communities" },
    TrendsCategory { id: "18", name: "People & Society" },
    TrendsCategory { id: "19", name: "Pets & Animals" },
    TrendsCategory { id: "20", name: "Real Estate" },
    TrendsCategory { id: "22", name: "Science" },
    TrendsCategory { id: "23", name: "Sports" },
    TrendsCategory { id: "24", name: "Travel" },
    TrendsCategory { id: "1237", name: "Business & Industrial" },
    TrendsCategory { id: "45", name: "Health" },
    TrendsCategory { id: "299", name: "Shopping" },
];

/// Display name for a category id; unknown ids read as "All Categories".
pub fn category_name(id: &str) -> &'static str {
    TRENDS_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map_or(TRENDS_CATEGORIES[0].name, |c| c.name)
}

/// Build the explore URL for `topic` (already trimmed).
///
/// The `cat` parameter is omitted for [`ALL_CATEGORIES_ID`].
pub fn trends_url(topic: &str, category: &str) -> String {
    let mut url = format!("{TRENDS_EXPLORE}{}", encode_uri_component(topic));
    if category != ALL_CATEGORIES_ID {
        url.push_str("&cat=");
        url.push_str(&encode_uri_component(category));
    }
    url.push_str("&hl=en");
    url
}

/// Human-readable description of a Trends search.
pub fn trends_display(topic: &str, category: &str) -> String {
    format!("Google Trends: {topic} ({})", category_name(category))
}
