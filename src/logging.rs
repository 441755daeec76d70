//! Tracing setup
//!
//! The filter is read from `REPAIR_QUOTE_LOG`. The interactive wizard owns
//! the terminal, so it logs to a file; CLI commands log to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::QuoteResult;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "REPAIR_QUOTE_LOG";

static TRACING_INIT: Once = Once::new();

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize tracing to stderr for CLI commands
pub fn init_stderr(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter(default_directive))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Initialize tracing to an append-only log file for the TUI
pub fn init_file(log_path: &Path, default_directive: &str) -> QuoteResult<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter(default_directive))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });
    Ok(())
}

/// Initialize tracing for the interactive wizard
///
/// Falls back to stderr when the log file cannot be opened, so a bad log
/// path never keeps the wizard from starting. Returns whether file logging
/// is active.
pub fn init_tui(log_path: &Path, default_directive: &str) -> bool {
    match init_file(log_path, default_directive) {
        Ok(()) => true,
        Err(e) => {
            init_stderr(default_directive);
            warn!(path = %log_path.display(), error = %e, "log file unavailable, logging to stderr");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_file_creates_log() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("repair-quote.log");

        init_file(&log_path, "repair_quote=info").unwrap();
        assert!(log_path.exists());

        // A second initialization is a no-op
        init_stderr("repair_quote=warn");
    }

    #[test]
    fn test_init_tui_falls_back_when_log_cannot_open() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(!init_tui(&blocker.join("repair-quote.log"), "repair_quote=warn"));
    }
}
