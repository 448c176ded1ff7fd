//! Per-step validation
//!
//! Every check here is a pure function of the form record.

use once_cell::sync::Lazy;
use regex::Regex;

use super::step::Step;
use crate::models::FormRecord;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Inline message shown under an invalid email field
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Check an address against the email syntax pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Feedback for the email field; nothing while it is still empty
pub fn email_feedback(email: &str) -> Option<&'static str> {
    if !email.is_empty() && !is_valid_email(email) {
        Some(INVALID_EMAIL_MESSAGE)
    } else {
        None
    }
}

/// Whether the record satisfies the step's requirements
pub fn can_proceed(step: Step, record: &FormRecord) -> bool {
    blocking_reason(step, record).is_none()
}

/// Why the step cannot be left yet, if it cannot
pub fn blocking_reason(step: Step, record: &FormRecord) -> Option<&'static str> {
    match step {
        Step::Plan => match record.plan.as_deref() {
            Some(plan) if !plan.is_empty() => None,
            _ => Some("Choose a plan to continue"),
        },
        Step::Pages => (record.pages.count == 0).then_some("Choose at least one page"),
        Step::Theme => record.theme.is_empty().then_some("Choose a theme to continue"),
        Step::Content => record
            .content
            .title
            .trim()
            .is_empty()
            .then_some("A website title is required"),
        Step::Inspiration => record
            .inspiration
            .is_empty()
            .then_some("Pick a template for inspiration"),
        Step::Extras | Step::Review => None,
        Step::Contact => {
            if record.contact_email.is_empty() {
                Some("An email address is required")
            } else if !is_valid_email(&record.contact_email) {
                Some(INVALID_EMAIL_MESSAGE)
            } else {
                None
            }
        }
    }
}
