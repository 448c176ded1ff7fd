//! Configuration module for SiteBrief
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - Settings persistence (wizard variant, delivery sink, logging)

pub mod paths;
pub mod settings;

pub use paths::SiteBriefPaths;
pub use settings::{EmailJsSettings, LoggingSettings, Settings, SinkKind, WizardVariant};
