//! The form state every query is derived from.
//!
//! [`FormState`] is a plain value: the formatter and dispatcher read it and
//! never mutate it. The editing operations here mirror the form controls
//! (checkbox toggles, preset picker, clear buttons).

use crate::catalog::PlatformId;
use crate::error::QueryError;
use crate::options::AdvancedOptions;
use crate::phrases::{find_preset, preset_phrases, PhraseBuilder};
use crate::trends::ALL_CATEGORIES_ID;
use crate::types::{SearchEngine, TimeFilter};
use serde::{Deserialize, Serialize};

/// Everything the user has entered.
///
/// Deserialisation fills any missing field with its default, so partial form
/// files (or snapshots saved by older versions) still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub main_topic: String,
    pub additional_keywords: String,
    /// Selected platforms in the order they were ticked.
    pub selected_platforms: Vec<PlatformId>,
    /// Selected phrases in the order they were picked.
    pub selected_phrases: Vec<String>,
    pub search_engine: SearchEngine,
    pub time_filter: TimeFilter,
    /// Google Trends category id; `"0"` means all categories.
    pub trends_category: String,
    pub advanced_options: AdvancedOptions,
    /// Phrase-section UI state; not used for query assembly.
    pub phrase_builder: PhraseBuilder,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            main_topic: String::new(),
            additional_keywords: String::new(),
            selected_platforms: Vec::new(),
            selected_phrases: Vec::new(),
            search_engine: SearchEngine::default(),
            time_filter: TimeFilter::default(),
            trends_category: ALL_CATEGORIES_ID.to_owned(),
            advanced_options: AdvancedOptions::default(),
            phrase_builder: PhraseBuilder::default(),
        }
    }
}

impl FormState {
    /// Start a form with just a topic.
    pub fn with_topic(topic: impl Into<String>) -> Self {
        Self {
            main_topic: topic.into(),
            ..Default::default()
        }
    }

    /// The trimmed topic, or `None` if it is blank.
    pub fn topic(&self) -> Option<&str> {
        let topic = self.main_topic.trim();
        (!topic.is_empty()).then_some(topic)
    }

    /// Selected platforms in selection order, first occurrence wins.
    pub fn platforms(&self) -> Vec<PlatformId> {
        let mut unique: Vec<PlatformId> = Vec::with_capacity(self.selected_platforms.len());
        for id in &self.selected_platforms {
            if !unique.contains(id) {
                unique.push(*id);
            }
        }
        unique
    }

    /// Selected phrases in selection order, first occurrence wins.
    pub fn phrases(&self) -> Vec<&str> {
        let mut unique: Vec<&str> = Vec::with_capacity(self.selected_phrases.len());
        for phrase in &self.selected_phrases {
            if !unique.contains(&phrase.as_str()) {
                unique.push(phrase);
            }
        }
        unique
    }

    /// Tick or untick a platform. Newly ticked platforms go to the end.
    pub fn toggle_platform(&mut self, id: PlatformId) {
        if let Some(pos) = self.selected_platforms.iter().position(|p| *p == id) {
            self.selected_platforms.remove(pos);
        } else {
            self.selected_platforms.push(id);
        }
    }

    /// Select or deselect a phrase. Newly selected phrases go to the end.
    pub fn toggle_phrase(&mut self, phrase: &str) {
        if let Some(pos) = self.selected_phrases.iter().position(|p| p == phrase) {
            self.selected_phrases.remove(pos);
        } else {
            self.selected_phrases.push(phrase.to_owned());
        }
    }

    /// Replace the phrase selection with every phrase of the preset's
    /// categories and expand those categories.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownPreset`] and leaves the form untouched if
    /// `id` does not name a preset.
    pub fn apply_preset(&mut self, id: &str) -> Result<(), QueryError> {
        let preset = find_preset(id).ok_or_else(|| QueryError::UnknownPreset(id.to_owned()))?;
        self.selected_phrases = preset_phrases(preset);
        self.phrase_builder.show_preset(preset);
        tracing::debug!(
            preset = preset.id,
            phrases = self.selected_phrases.len(),
            "applied phrase preset"
        );
        Ok(())
    }

    /// Deselect every phrase, forget the preset, collapse all categories.
    pub fn clear_phrases(&mut self) {
        self.selected_phrases.clear();
        self.phrase_builder.reset();
    }

    /// Reset every field to its default.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::PHRASE_CATEGORIES;

    #[test]
    fn default_form_is_empty() {
        let form = FormState::default();
        assert!(form.topic().is_none());
        assert!(form.selected_platforms.is_empty());
        assert_eq!(form.search_engine, SearchEngine::Google);
        assert_eq!(form.time_filter, TimeFilter::Any);
        assert_eq!(form.trends_category, "0");
    }

    #[test]
    fn topic_is_trimmed_and_blank_is_none() {
        assert_eq!(FormState::with_topic("  crm tools ").topic(), Some("crm tools"));
        assert!(FormState::with_topic(" \t ").topic().is_none());
    }

    #[test]
    fn toggle_platform_preserves_selection_order() {
        let mut form = FormState::default();
        form.toggle_platform(PlatformId::Twitter);
        form.toggle_platform(PlatformId::Reddit);
        form.toggle_platform(PlatformId::Facebook);
        form.toggle_platform(PlatformId::Twitter);
        assert_eq!(
            form.selected_platforms,
            vec![PlatformId::Reddit, PlatformId::Facebook]
        );
        form.toggle_platform(PlatformId::Twitter);
        assert_eq!(form.selected_platforms.last(), Some(&PlatformId::Twitter));
    }

    #[test]
    fn toggle_phrase_adds_and_removes() {
        let mut form = FormState::default();
        form.toggle_phrase("I think");
        form.toggle_phrase("I feel");
        form.toggle_phrase("I think");
        assert_eq!(form.selected_phrases, vec!["I feel".to_owned()]);
    }

    #[test]
    fn apply_preset_replaces_selection() {
        let mut form = FormState::default();
        form.toggle_phrase("custom phrase");
        form.apply_preset("pain-discovery").expect("preset");
        assert!(!form.selected_phrases.contains(&"custom phrase".to_owned()));
        let expected = PHRASE_CATEGORIES[2].phrases.len() + PHRASE_CATEGORIES[3].phrases.len();
        assert_eq!(form.selected_phrases.len(), expected);
        assert!(form.phrase_builder.is_open(2));
        assert!(form.phrase_builder.is_open(3));
        assert!(!form.phrase_builder.is_open(0));
    }

    #[test]
    fn unknown_preset_leaves_form_untouched() {
        let mut form = FormState::default();
        form.toggle_phrase("I think");
        let before = form.clone();
        let err = form.apply_preset("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert_eq!(form, before);
    }

    #[test]
    fn clear_phrases_resets_builder() {
        let mut form = FormState::default();
        form.apply_preset("complete-research").expect("preset");
        form.clear_phrases();
        assert!(form.selected_phrases.is_empty());
        assert_eq!(form.phrase_builder, PhraseBuilder::default());
    }

    #[test]
    fn clear_all_restores_defaults() {
        let mut form = FormState::with_topic("saas");
        form.toggle_platform(PlatformId::Reddit);
        form.search_engine = SearchEngine::Bing;
        form.advanced_options.reddit.min_score = true;
        form.clear_all();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn duplicate_selections_collapse_in_order() {
        let form = FormState {
            selected_platforms: vec![PlatformId::Reddit, PlatformId::Twitter, PlatformId::Reddit],
            selected_phrases: vec!["IMO".into(), "I feel".into(), "IMO".into()],
            ..Default::default()
        };
        assert_eq!(form.platforms(), vec![PlatformId::Reddit, PlatformId::Twitter]);
        assert_eq!(form.phrases(), vec!["IMO", "I feel"]);
    }

    #[test]
    fn partial_form_file_loads_with_defaults() {
        let form: FormState = serde_json::from_str(
            r#"{"main_topic": "meal planning apps", "selected_platforms": ["reddit", "google-trends"]}"#,
        )
        .expect("deserialize");
        assert_eq!(form.main_topic, "meal planning apps");
        assert_eq!(
            form.selected_platforms,
            vec![PlatformId::Reddit, PlatformId::GoogleTrends]
        );
        assert_eq!(form.search_engine, SearchEngine::Google);
        assert_eq!(form.time_filter, TimeFilter::Any);
        assert_eq!(form.trends_category, "0");
    }
}
