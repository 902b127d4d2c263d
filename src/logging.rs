//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins, otherwise `default_filter`.
///
/// An unparseable `default_filter` falls back to `info`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_filter).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global fmt subscriber, writing to stderr so stdout stays
/// clean for queries and links.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
}
