//! The step wizard
//!
//! Step sequences, per-step validation, the controller that drives
//! navigation, and the payload handed to a submission sink.

pub mod controller;
pub mod payload;
pub mod step;
pub mod validation;

pub use controller::WizardController;
pub use payload::SubmissionPayload;
pub use step::Step;
