//! Logging initialization
//!
//! TUI mode: logs to `<base>/logs/sitebrief-{datetime}.log`
//! CLI mode: logs to stderr

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingSettings, SiteBriefPaths};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Keeps the file writer alive; buffered lines are flushed on drop
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Filter directive from settings and the `--debug` flag
pub fn level_directive(settings: &LoggingSettings, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        settings.level.clone()
    }
}

/// Log file name for a session started now
pub fn log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("sitebrief-{}.log", timestamp)
}

/// Initialize the global subscriber
pub fn init_logging(
    paths: &SiteBriefPaths,
    settings: &LoggingSettings,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let level = level_directive(settings, debug_override);
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or(level));

    if is_tui_mode && settings.to_file {
        // Stderr would draw over the alternate screen
        let logs_dir = paths.logs_dir();
        std::fs::create_dir_all(&logs_dir)?;

        let file_name = log_file_name();
        let log_file_path = logs_dir.join(&file_name);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()?;

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}
