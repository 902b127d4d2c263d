//! Form files and command-line form overrides.
//!
//! A form file is a serialised [`FormState`], TOML by default or JSON when the
//! path ends in `.json`. Missing fields take their defaults.

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use painpoint_query::{FormState, PlatformId, SearchEngine, TimeFilter};
use std::path::Path;

/// Serialisation format of a form file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Toml,
    Json,
}

impl FormFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parse form file contents.
///
/// # Errors
///
/// Returns [`AppError::Form`] if the content does not parse.
pub fn parse_form(content: &str, format: FormFormat) -> Result<FormState> {
    match format {
        FormFormat::Toml => toml::from_str(content).map_err(|e| AppError::Form(e.to_string())),
        FormFormat::Json => {
            serde_json::from_str(content).map_err(|e| AppError::Form(e.to_string()))
        }
    }
}

/// Read a form file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_form(path: &Path) -> Result<FormState> {
    let content = std::fs::read_to_string(path)?;
    let form = parse_form(&content, FormFormat::from_path(path))
        .map_err(|e| AppError::Form(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "loaded form file");
    Ok(form)
}

/// Render a form in the given format.
///
/// # Errors
///
/// Returns [`AppError::Form`] if serialisation fails.
pub fn render_form(form: &FormState, format: FormFormat) -> Result<String> {
    match format {
        FormFormat::Toml => {
            toml::to_string_pretty(form).map_err(|e| AppError::Form(e.to_string()))
        }
        FormFormat::Json => {
            serde_json::to_string_pretty(form).map_err(|e| AppError::Form(e.to_string()))
        }
    }
}

/// Field values given on the command line.
///
/// `platforms` replaces the selection when non-empty. `preset` replaces the
/// phrase selection, then `phrases` are added to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOverrides {
    pub topic: Option<String>,
    pub keywords: Option<String>,
    pub platforms: Vec<PlatformId>,
    pub phrases: Vec<String>,
    pub preset: Option<String>,
    pub engine: Option<SearchEngine>,
    pub time_filter: Option<TimeFilter>,
    pub trends_category: Option<String>,
}

impl FormOverrides {
    /// Apply the overrides to `form`.
    ///
    /// # Errors
    ///
    /// Returns an error if `preset` names no preset; `form` is then unchanged.
    pub fn apply(&self, form: &mut FormState) -> Result<()> {
        if let Some(preset) = &self.preset {
            form.apply_preset(preset)?;
        }
        if let Some(topic) = &self.topic {
            form.main_topic.clone_from(topic);
        }
        if let Some(keywords) = &self.keywords {
            form.additional_keywords.clone_from(keywords);
        }
        if !self.platforms.is_empty() {
            form.selected_platforms = self.platforms.clone();
        }
        for phrase in &self.phrases {
            if !form.selected_phrases.contains(phrase) {
                form.selected_phrases.push(phrase.clone());
            }
        }
        if let Some(engine) = self.engine {
            form.search_engine = engine;
        }
        if let Some(time_filter) = self.time_filter {
            form.time_filter = time_filter;
        }
        if let Some(category) = &self.trends_category {
            form.trends_category.clone_from(category);
        }
        Ok(())
    }
}

/// Build the working form: the form file if given, otherwise a blank form
/// with the configured defaults, then the command-line overrides.
///
/// # Errors
///
/// Returns an error if the form file cannot be loaded or an override is invalid.
pub fn resolve_form(
    config: &AppConfig,
    form_path: Option<&Path>,
    overrides: &FormOverrides,
) -> Result<FormState> {
    let mut form = match form_path {
        Some(path) => load_form(path)?,
        None => config.blank_form(),
    };
    overrides.apply(&mut form)?;
    Ok(form)
}
