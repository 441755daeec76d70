//! Path management for repair-quote
//!
//! ## Path Resolution Order
//!
//! 1. `REPAIR_QUOTE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `repair-quote`
//!    (`$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows)

use std::path::PathBuf;

use crate::error::QuoteError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "REPAIR_QUOTE_DATA_DIR";

/// Manages all paths used by repair-quote
#[derive(Debug, Clone)]
pub struct QuotePaths {
    /// Base directory for config, logs and the submission log
    base_dir: PathBuf,
}

impl QuotePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, QuoteError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create QuotePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the append-only submission log
    pub fn submissions_log(&self) -> PathBuf {
        self.base_dir.join("submissions.jsonl")
    }

    /// Get the path to the diagnostic log written in TUI mode
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("repair-quote.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), QuoteError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| QuoteError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, QuoteError> {
    let dirs = directories::BaseDirs::new()
        .ok_or_else(|| QuoteError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("repair-quote"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.submissions_log(),
            temp_dir.path().join("submissions.jsonl")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = QuotePaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().join("nested").join("quote"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
