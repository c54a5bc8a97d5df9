//! Path management for shopbooks
//!
//! Provides XDG-compliant path resolution for configuration, record snapshots
//! and report exports.
//!
//! ## Path Resolution Order
//!
//! 1. `SHOPBOOKS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/shopbooks` or `~/.config/shopbooks`
//! 3. Windows: `%APPDATA%\shopbooks`

use std::path::PathBuf;

use crate::error::ShopError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SHOPBOOKS_DATA_DIR";

/// Manages all paths used by shopbooks
#[derive(Debug, Clone)]
pub struct ShopPaths {
    /// Base directory for all shopbooks data
    base_dir: PathBuf,
}

impl ShopPaths {
    /// Create a new ShopPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, ShopError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ShopPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the record snapshots
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default export directory
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to orders.json
    pub fn orders_file(&self) -> PathBuf {
        self.data_dir().join("orders.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), ShopError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ShopError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ShopError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| ShopError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }

    /// Check if shopbooks has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ShopError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| ShopError::Config("Could not determine HOME directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("shopbooks"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ShopError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ShopError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("shopbooks"))
}
