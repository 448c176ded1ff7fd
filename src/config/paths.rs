//! Path management for SiteBrief
//!
//! ## Path Resolution Order
//!
//! 1. `SITEBRIEF_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/sitebrief`, `%APPDATA%\sitebrief`, ...)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::BriefError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SITEBRIEF_DATA_DIR";

/// Manages all paths used by SiteBrief
#[derive(Debug, Clone)]
pub struct SiteBriefPaths {
    /// Base directory for all SiteBrief files
    base_dir: PathBuf,
}

impl SiteBriefPaths {
    /// Create a new SiteBriefPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BriefError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SiteBriefPaths with a custom base directory (useful for testing)
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

    /// Get the log directory
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), BriefError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BriefError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.logs_dir())
            .map_err(|e| BriefError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BriefError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| BriefError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("sitebrief"))
}
