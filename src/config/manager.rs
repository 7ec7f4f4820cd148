//! Configuration manager for loading and saving application configuration
//!
//! Persists configuration as JSON in the directory named by the
//! `CLAPSENSE_CONFIG_DIR` environment variable (current directory when
//! unset), using atomic writes to prevent corruption. A missing or corrupt
//! file falls back to defaults rather than failing startup.

use crate::config::models::AppConfig;
use crate::error::{ClapSenseError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the path to the configuration file
    pub fn config_path() -> PathBuf {
        let base = std::env::var("CLAPSENSE_CONFIG_DIR").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(base).join("clapsense.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<AppConfig> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    ///
    /// If the configuration file doesn't exist or is corrupt, returns
    /// default configuration.
    pub fn load_from(config_path: &Path) -> Result<AppConfig> {
        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(config: &AppConfig) -> Result<()> {
        Self::save_to(&Self::config_path(), config)
    }

    /// Save configuration to an explicit path with atomic write
    ///
    /// Writes to a temporary file first, then renames over the target so a
    /// crash mid-write never leaves a truncated config behind.
    pub fn save_to(config_path: &Path, config: &AppConfig) -> Result<()> {
        let config_dir = config_path.parent().ok_or_else(|| {
            ClapSenseError::ConfigError(StringError::new("Invalid config path"))
        })?;
        if !config_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(config_dir)?;
        }

        let temp_path = config_path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(&temp_path, config_path)?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
