//! EmailJS delivery
//!
//! Posts the payload as template parameters to the EmailJS REST endpoint.
//! Non-browser API access must be enabled in the EmailJS account settings.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use super::SubmissionSink;
use crate::config::EmailJsSettings;
use crate::error::{BriefError, BriefResult};
use crate::wizard::SubmissionPayload;

/// Request body for `POST /api/v1.0/email/send`
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a SubmissionPayload,
}

/// Sends finished forms through EmailJS
pub struct EmailJsSink {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    client: Client,
}

impl EmailJsSink {
    pub fn new(settings: &EmailJsSettings) -> BriefResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| BriefError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: settings.endpoint.clone(),
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            public_key: settings.resolved_public_key(),
            client,
        })
    }

    fn request<'a>(&'a self, payload: &'a SubmissionPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        }
    }
}

impl SubmissionSink for EmailJsSink {
    fn name(&self) -> &str {
        "emailjs"
    }

    fn send(&self, payload: &SubmissionPayload) -> BriefResult<()> {
        tracing::debug!(endpoint = %self.endpoint, template = %self.template_id, "sending via EmailJS");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.request(payload))
            .send()?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "EmailJS accepted submission");
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %body, "EmailJS rejected submission");
        Err(BriefError::Submission(format!(
            "EmailJS returned {}: {}",
            status,
            body.trim()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormRecord;

    fn settings(endpoint: &str) -> EmailJsSettings {
        EmailJsSettings {
            endpoint: endpoint.to_string(),
            service_id: "service_test".into(),
            template_id: "template_test".into(),
            public_key: "pk_test".into(),
            timeout_secs: 2,
        }
    }

    #[test]
    fn test_request_shape() {
        let sink = EmailJsSink::new(&settings("http://localhost/send")).unwrap();
        let payload = SubmissionPayload::from_record(&FormRecord::default(), false, None);

        let json = serde_json::to_value(sink.request(&payload)).unwrap();
        assert_eq!(json["service_id"], "service_test");
        assert_eq!(json["template_id"], "template_test");
        assert_eq!(json["template_params"]["pages_count"], 1);
        assert_eq!(json["template_params"]["extras"], "None selected");
    }

    #[test]
    fn test_unreachable_endpoint_is_submission_error() {
        let sink = EmailJsSink::new(&settings("http://127.0.0.1:1/send")).unwrap();
        let payload = SubmissionPayload::from_record(&FormRecord::default(), false, None);

        let err = sink.send(&payload).unwrap_err();
        assert!(matches!(err, BriefError::Submission(_)));
    }
}
