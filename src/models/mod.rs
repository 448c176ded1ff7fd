//! Core data models for SiteBrief
//!
//! The form record the wizard fills in, the logo attachment rules, and the
//! fixed catalogs the selection steps offer.

pub mod catalog;
pub mod form;
pub mod logo;

pub use form::{ContentDetails, FormPatch, FormRecord, PageSelection};
pub use logo::{LogoAsset, LogoChoice, MAX_LOGO_BYTES};
