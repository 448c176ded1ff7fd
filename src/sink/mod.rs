//! Submission sinks
//!
//! A sink delivers a finished form somewhere outside the wizard. Sinks are
//! called from a worker thread in the TUI, so they must be `Send + Sync`.

pub mod emailjs;
pub mod log;

use std::sync::Arc;

use crate::config::{Settings, SinkKind};
use crate::error::BriefResult;
use crate::wizard::SubmissionPayload;

pub use self::emailjs::EmailJsSink;
pub use self::log::LogSink;

/// Delivers a finished form
pub trait SubmissionSink: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Deliver the payload. Any error is reported to the user as a failed
    /// submission that can be retried.
    fn send(&self, payload: &SubmissionPayload) -> BriefResult<()>;
}

/// Build the sink selected in settings
pub fn from_settings(settings: &Settings) -> BriefResult<Arc<dyn SubmissionSink>> {
    settings.validate()?;
    let sink: Arc<dyn SubmissionSink> = match settings.sink {
        SinkKind::Log => Arc::new(LogSink::new()),
        SinkKind::Emailjs => Arc::new(EmailJsSink::new(&settings.emailjs)?),
    };
    tracing::debug!(sink = sink.name(), "submission sink ready");
    Ok(sink)
}
