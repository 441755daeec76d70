//! User settings for repair-quote
//!
//! Manages pricing and display preferences and the policy applied to
//! dependent wizard fields.

use serde::{Deserialize, Serialize};

use super::paths::QuotePaths;
use crate::error::QuoteError;
use crate::models::ContactMethod;

/// What happens to the chosen model when the device category changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DependentFieldPolicy {
    /// Clear the model when a different device is chosen (default)
    #[default]
    Clear,
    /// Keep whatever was entered as scratch state
    Keep,
}

/// User settings for repair-quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before quotes
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Base price the multipliers are applied to
    #[serde(default = "default_base_price")]
    pub base_price: u32,

    /// Policy for the model field when the device changes
    #[serde(default)]
    pub dependent_fields: DependentFieldPolicy,

    /// Contact method preselected on the quote step
    #[serde(default)]
    pub default_contact_method: ContactMethod,

    /// Whether submissions are appended to the submission log
    #[serde(default = "default_record_submissions")]
    pub record_submissions: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_base_price() -> u32 {
    crate::services::pricing::BASE_PRICE
}

fn default_record_submissions() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            base_price: default_base_price(),
            dependent_fields: DependentFieldPolicy::default(),
            default_contact_method: ContactMethod::default(),
            record_submissions: default_record_submissions(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &QuotePaths) -> Result<Self, QuoteError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| QuoteError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| QuoteError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &QuotePaths) -> Result<(), QuoteError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| QuoteError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| QuoteError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format a whole-unit price with the configured currency symbol
    pub fn format_price(&self, amount: u32) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.base_price, 50);
        assert_eq!(settings.dependent_fields, DependentFieldPolicy::Clear);
        assert_eq!(settings.default_contact_method, ContactMethod::Sms);
        assert!(settings.record_submissions);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.dependent_fields = DependentFieldPolicy::Keep;
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.dependent_fields, DependentFieldPolicy::Keep);
        assert_eq!(loaded.format_price(270), "€270");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"base_price": 80}"#).unwrap();
        assert_eq!(settings.base_price, 80);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.record_submissions);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, QuoteError::Config(_)));
    }
}
