//! User settings for SiteBrief
//!
//! Manages which wizard variant runs, where finished forms are delivered,
//! and logging preferences.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::paths::SiteBriefPaths;
use crate::error::BriefError;

/// Environment variable that overrides the EmailJS public key
pub const PUBLIC_KEY_ENV: &str = "SITEBRIEF_EMAILJS_PUBLIC_KEY";

/// Which sequence of steps the wizard presents
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum WizardVariant {
    /// Pages through Review (7 steps)
    #[default]
    Standard,
    /// A plan selection step ahead of the standard sequence (8 steps)
    WithPlan,
}

/// Where a finished form is delivered
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Write the payload to the log only
    #[default]
    Log,
    /// Send through the EmailJS REST API
    Emailjs,
}

impl fmt::Display for WizardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::WithPlan => write!(f, "with-plan"),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log => write!(f, "log"),
            Self::Emailjs => write!(f, "emailjs"),
        }
    }
}

/// EmailJS delivery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailJsSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub service_id: String,

    #[serde(default)]
    pub template_id: String,

    /// Public ("user") key; `SITEBRIEF_EMAILJS_PUBLIC_KEY` takes precedence
    #[serde(default)]
    pub public_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for EmailJsSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EmailJsSettings {
    /// The public key, preferring the environment override
    pub fn resolved_public_key(&self) -> String {
        std::env::var(PUBLIC_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| self.public_key.clone())
    }
}

/// Logging preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write TUI-mode logs to a file instead of stderr
    #[serde(default = "default_true")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: true,
        }
    }
}

/// User settings for SiteBrief
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub wizard_variant: WizardVariant,

    #[serde(default)]
    pub sink: SinkKind,

    #[serde(default)]
    pub emailjs: EmailJsSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            wizard_variant: WizardVariant::default(),
            sink: SinkKind::default(),
            emailjs: EmailJsSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SiteBriefPaths) -> Result<Self, BriefError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BriefError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BriefError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SiteBriefPaths) -> Result<(), BriefError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BriefError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BriefError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check that the selected sink has what it needs to deliver
    pub fn validate(&self) -> Result<(), BriefError> {
        if self.sink == SinkKind::Emailjs {
            let missing: Vec<&str> = [
                ("service_id", self.emailjs.service_id.clone()),
                ("template_id", self.emailjs.template_id.clone()),
                ("public_key", self.emailjs.resolved_public_key()),
            ]
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

            if !missing.is_empty() {
                return Err(BriefError::Config(format!(
                    "EmailJS sink is missing: {}",
                    missing.join(", ")
                )));
            }
            if self.emailjs.timeout_secs == 0 {
                return Err(BriefError::Config(
                    "EmailJS timeout must be at least one second".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.wizard_variant, WizardVariant::Standard);
        assert_eq!(settings.sink, SinkKind::Log);
        assert_eq!(settings.emailjs.timeout_secs, 15);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteBriefPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.wizard_variant = WizardVariant::WithPlan;
        settings.emailjs.service_id = "service_x".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.wizard_variant, WizardVariant::WithPlan);
        assert_eq!(loaded.emailjs.service_id, "service_x");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteBriefPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"sink": "emailjs"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.sink, SinkKind::Emailjs);
        assert_eq!(loaded.emailjs.endpoint, default_endpoint());
        assert_eq!(loaded.wizard_variant, WizardVariant::Standard);
    }

    #[test]
    fn test_emailjs_requires_credentials() {
        let mut settings = Settings::default();
        settings.sink = SinkKind::Emailjs;
        settings.emailjs.service_id = "service_x".into();
        settings.emailjs.public_key = "pk".into();

        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("template_id"));

        settings.emailjs.template_id = "template_y".into();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_variant_serde_names() {
        let json = serde_json::to_string(&WizardVariant::WithPlan).unwrap();
        assert_eq!(json, "\"with-plan\"");
    }
}
