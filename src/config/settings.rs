//! User settings for shopbooks
//!
//! Manages presentation preferences: currency symbol, date format, and the
//! defaults used by the report commands when no flag is given.

use serde::{Deserialize, Serialize};

use super::paths::ShopPaths;
use crate::error::ShopError;
use crate::export::ExportFormat;
use crate::models::Granularity;
use crate::storage::file_io::write_json_atomic;

/// User settings for shopbooks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for export detail rows (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Granularity used when `--by` is omitted
    #[serde(default)]
    pub default_granularity: Granularity,

    /// Export format used when `--format` is omitted
    #[serde(default)]
    pub default_export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_granularity: Granularity::default(),
            default_export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ShopPaths) -> Result<Self, ShopError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ShopError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ShopError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ShopPaths) -> Result<(), ShopError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
