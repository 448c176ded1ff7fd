//! Log-only delivery
//!
//! Writes each payload field to the log. Used when no email service is
//! configured.

use super::SubmissionSink;
use crate::error::BriefResult;
use crate::wizard::SubmissionPayload;

#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    fn send(&self, payload: &SubmissionPayload) -> BriefResult<()> {
        tracing::info!(contact = %payload.contact_email, "form submitted");
        for (key, value) in payload.entries() {
            tracing::info!(field = key, value = %value);
        }
        Ok(())
    }
}
