//! Application configuration, loaded from TOML.

use crate::error::{AppError, Result};
use painpoint_query::{FormState, SearchEngine, SuggestConfig, TimeFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for new searches.
    pub search: SearchDefaults,
    /// Topic suggestion lookups.
    pub suggest: SuggestConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// Defaults applied to a blank form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    pub engine: SearchEngine,
    pub time_filter: TimeFilter,
    /// Google Trends category id (`"0"` = all categories).
    pub trends_category: String,
    /// Open a browser tab per platform. When false, links are only printed.
    pub open_tabs: bool,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            engine: SearchEngine::Google,
            time_filter: TimeFilter::Any,
            trends_category: painpoint_query::trends::ALL_CATEGORIES_ID.to_owned(),
            open_tabs: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "painpoint=info,painpoint_query=info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path (see [`crate::app_dirs::config_file`]).
    pub fn default_config_path() -> PathBuf {
        crate::app_dirs::config_file()
    }

    /// A blank form carrying the configured engine, time filter, and
    /// Trends category.
    pub fn blank_form(&self) -> FormState {
        FormState {
            search_engine: self.search.engine,
            time_filter: self.search.time_filter,
            trends_category: self.search.trends_category.clone(),
            ..FormState::default()
        }
    }
}
