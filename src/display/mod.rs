//! Display formatting for CLI output

pub mod catalog;

pub use catalog::{format_catalog, format_settings};
