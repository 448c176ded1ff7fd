//! SiteBrief - Terminal questionnaire for website requirements
//!
//! This library walks a client through a fixed sequence of steps (pages,
//! theme, content and logo, inspiration, extras, contact, review), validates
//! each step before it can be left, and hands the finished form to a
//! pluggable submission sink.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Form record, logo attachment and the option catalogs
//! - `wizard`: Step sequencing, validation and the submission payload
//! - `sink`: Where finished forms are delivered (log, EmailJS)
//! - `tui`: The full-screen wizard
//! - `display`: Table output for the CLI
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use sitebrief::config::WizardVariant;
//! use sitebrief::sink::LogSink;
//! use sitebrief::wizard::WizardController;
//!
//! let mut wizard = WizardController::new(WizardVariant::Standard);
//! // ... fill in the record and advance to the review step ...
//! wizard.submit(&LogSink::new())?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod sink;
pub mod tui;
pub mod wizard;

pub use error::{BriefError, BriefResult};
