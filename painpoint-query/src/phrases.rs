//! Phrase taxonomy, presets, and the phrase-builder section of the form.

use serde::{Deserialize, Serialize};

/// A named group of phrases that bias results toward first-person language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseCategory {
    pub title: &'static str,
    pub phrases: &'static [&'static str],
}

/// A shortcut that selects every phrase of several categories at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Indices into [`PHRASE_CATEGORIES`].
    pub categories: &'static [usize],
}

pub const PHRASE_CATEGORIES: &[PhraseCategory] = &[
    PhraseCategory {
        title: "Personal Expressions",
        phrases: &[
            "I think",
            "I feel",
            "I was",
            "I have been",
            "I experienced",
            "my experience",
            "in my opinion",
            "IMO",
            "my advice",
        ],
    },
    PhraseCategory {
        title: "Learning Moments",
        phrases: &[
            "I found that",
            "I learned",
            "I realized",
            "what I wish I knew",
            "what I regret",
            "my biggest mistake",
        ],
    },
    PhraseCategory {
        title: "Problems & Struggles",
        phrases: &[
            "struggles",
            "problems",
            "issues",
            "challenge",
            "difficulties",
            "hardships",
            "pain point",
            "barriers",
            "obstacles",
        ],
    },
    PhraseCategory {
        title: "Emotions & Concerns",
        phrases: &[
            "concerns",
            "frustrations",
            "worries",
            "hesitations",
            "my biggest struggle",
            "my biggest fear",
        ],
    },
];

pub const PRESETS: &[Preset] = &[
    Preset {
        id: "customer-feedback",
        name: "Customer Feedback",
        description: "Personal opinions and emotional responses",
        categories: &[0, 3],
    },
    Preset {
        id: "user-research",
        name: "User Research",
        description: "Learning experiences and challenges",
        categories: &[1, 2],
    },
    Preset {
        id: "pain-discovery",
        name: "Pain Point Discovery",
        description: "Problems and emotional concerns",
        categories: &[2, 3],
    },
    Preset {
        id: "experience-insights",
        name: "Experience Insights",
        description: "Personal experiences and learnings",
        categories: &[0, 1],
    },
    Preset {
        id: "complete-research",
        name: "Complete Research",
        description: "All phrase categories",
        categories: &[0, 1, 2, 3],
    },
];

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// All phrases of the given categories, in category order, without
/// duplicates. Out-of-range indices are skipped.
pub fn preset_phrases(preset: &Preset) -> Vec<String> {
    let mut phrases: Vec<String> = Vec::new();
    for phrase in preset
        .categories
        .iter()
        .filter_map(|&index| PHRASE_CATEGORIES.get(index))
        .flat_map(|category| category.phrases.iter())
    {
        if !phrases.iter().any(|p| p == phrase) {
            phrases.push((*phrase).to_owned());
        }
    }
    phrases
}

/// UI state of the phrase section: which categories are expanded and which
/// preset was last applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseBuilder {
    pub open_categories: Vec<bool>,
    pub selected_preset: Option<String>,
}

impl Default for PhraseBuilder {
    fn default() -> Self {
        Self {
            open_categories: vec![false; PHRASE_CATEGORIES.len()],
            selected_preset: None,
        }
    }
}

impl PhraseBuilder {
    /// Flip one category's expanded flag. Out-of-range indices are ignored.
    pub fn toggle_category(&mut self, index: usize) {
        if let Some(open) = self.open_categories.get_mut(index) {
            *open = !*open;
        }
    }

    /// Whether category `index` is expanded.
    pub fn is_open(&self, index: usize) -> bool {
        self.open_categories.get(index).copied().unwrap_or(false)
    }

    /// Expand exactly the preset's categories and remember the preset.
    pub(crate) fn show_preset(&mut self, preset: &Preset) {
        self.open_categories = (0..PHRASE_CATEGORIES.len())
            .map(|index| preset.categories.contains(&index))
            .collect();
        self.selected_preset = Some(preset.id.to_owned());
    }

    /// Collapse everything and forget the preset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
