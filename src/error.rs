//! Custom error types for SiteBrief
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SiteBrief operations
#[derive(Error, Debug)]
pub enum BriefError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A step's required fields are missing or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// An attached file was refused (wrong type or too large)
    #[error("File rejected: {0}")]
    FileRejected(String),

    /// The submission sink failed to deliver the form
    #[error("Submission failed: {0}")]
    Submission(String),

    /// A submission is already being delivered
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// Submit was requested before reaching the review step
    #[error("Cannot submit from step {current}; the review step is {review}")]
    NotAtReview { current: usize, review: usize },
}

impl BriefError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::FileRejected(_))
    }

    /// Check if the user can retry the action without re-entering data
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Submission(_) | Self::Io(_))
    }
}

impl From<std::io::Error> for BriefError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BriefError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for BriefError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Submission(format!("request timed out: {}", err))
        } else {
            Self::Submission(err.to_string())
        }
    }
}

/// Result type alias for SiteBrief operations
pub type BriefResult<T> = Result<T, BriefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BriefError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_at_review_error() {
        let err = BriefError::NotAtReview {
            current: 2,
            review: 6,
        };
        assert_eq!(
            err.to_string(),
            "Cannot submit from step 2; the review step is 6"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(BriefError::FileRejected("too big".into()).is_validation());
        assert!(BriefError::Validation("bad".into()).is_validation());
        assert!(!BriefError::SubmissionInFlight.is_validation());
        assert!(BriefError::Submission("502".into()).is_retryable());
        assert!(!BriefError::Config("x".into()).is_retryable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let brief_err: BriefError = io_err.into();
        assert!(matches!(brief_err, BriefError::Io(_)));
    }
}
