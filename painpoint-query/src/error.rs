//! Error types for the painpoint-query crate.
//!
//! All errors use stable string messages suitable for display to users.
//! Query text never appears in error messages; it is logged at trace level
//! only.

/// Errors that can occur while assembling or dispatching searches.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The form is missing a topic or a platform selection.
    #[error("validation error: {0}")]
    Validation(String),

    /// A platform id that is not in the catalog.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    /// A preset id that is not in the preset table.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Opening a URL in a new browsing context failed.
    #[error("open error: {0}")]
    Open(String),

    /// An HTTP request (search suggestions) failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A response or input value could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for painpoint-query results.
pub type Result<T> = std::result::Result<T, QueryError>;
