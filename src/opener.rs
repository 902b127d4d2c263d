//! [`TabOpener`] implementations for the CLI.

use painpoint_query::{QueryError, TabOpener};
use std::process::{Command, Stdio};
use std::sync::Mutex;

/// Opens URLs in the desktop's default browser.
///
/// Uses `open` on macOS, `rundll32 url.dll,FileProtocolHandler` on Windows and
/// `xdg-open` elsewhere. The URL is always passed as a single argument, never
/// through a shell, so `&` and `"` reach the browser intact.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTabOpener;

/// Launcher program and arguments for `url` on the OS named `os`
/// (as in [`std::env::consts::OS`]).
pub fn launcher(os: &str, url: &str) -> (&'static str, Vec<String>) {
    match os {
        "macos" => ("open", vec![url.to_owned()]),
        "windows" => (
            "rundll32",
            vec!["url.dll,FileProtocolHandler".to_owned(), url.to_owned()],
        ),
        _ => ("xdg-open", vec![url.to_owned()]),
    }
}

impl SystemTabOpener {
    fn command(url: &str) -> Command {
        let (program, args) = launcher(std::env::consts::OS, url);
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}

impl TabOpener for SystemTabOpener {
    fn open(&self, url: &str) -> Result<(), QueryError> {
        let mut child = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| QueryError::Open(format!("cannot launch browser: {e}")))?;
        // Reap the launcher so long-lived callers do not collect zombies.
        std::thread::spawn(move || {
            if let Err(e) = child.wait() {
                tracing::debug!(error = %e, "browser launcher wait failed");
            }
        });
        Ok(())
    }
}

/// Records URLs instead of opening them.
#[derive(Debug, Default)]
pub struct DryRunOpener {
    opened: Mutex<Vec<String>>,
}

impl DryRunOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs passed to [`TabOpener::open`], in call order.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl TabOpener for DryRunOpener {
    fn open(&self, url: &str) -> Result<(), QueryError> {
        tracing::debug!("dry run, not opening tab");
        self.opened
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_owned());
        Ok(())
    }
}
