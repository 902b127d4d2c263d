//! Error types for the painpoint application shell.

use painpoint_query::QueryError;

/// Top-level error type for configuration, form loading, and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration file could not be parsed or written.
    #[error("config error: {0}")]
    Config(String),

    /// A form file could not be parsed, or a form flag was invalid.
    #[error("form error: {0}")]
    Form(String),

    /// No signed-in user, or the account's tier does not allow the action.
    #[error("session error: {0}")]
    Session(String),

    /// Saved-query storage failed or the query does not exist.
    #[error("query store error: {0}")]
    Store(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Query assembly or suggestion error.
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
