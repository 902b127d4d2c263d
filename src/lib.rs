//! Painpoint: social-media pain point research from the command line.
//!
//! Query assembly lives in [`painpoint_query`]. This crate adds the shell
//! around it:
//! - **Configuration**: TOML defaults for engine, time filter, suggestions and logging
//! - **Form files**: TOML/JSON snapshots of the form plus command-line overrides
//! - **Tab opening**: the system browser launcher and a dry-run opener
//! - **Collaborators**: session, subscription and saved-query interfaces

pub mod app_dirs;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod form_file;
pub mod listing;
pub mod logging;
pub mod opener;

pub use collaborators::{
    save_query, InMemoryQueryStore, QueryStore, SavedQuery, SessionService, SubscriptionTier, User,
};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use form_file::{load_form, resolve_form, FormFormat, FormOverrides};
pub use opener::{DryRunOpener, SystemTabOpener};
