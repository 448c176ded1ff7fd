//! Flat submission payload
//!
//! The form record is flattened into the string fields the email template
//! expects, with readable fallbacks for anything left empty.

use serde::Serialize;

use crate::error::BriefResult;
use crate::models::{catalog, FormRecord, LogoChoice, PageSelection};

pub const DEFAULT_PAGE_NAMING: &str = "Default naming will be used";
pub const NO_DESCRIPTION: &str = "No description provided";
pub const NO_LOGO_OPTION: &str = "No logo option selected";
pub const NO_INSPIRATION: &str = "No inspiration selected";
pub const NO_EXTRAS: &str = "None selected";
pub const NO_PLAN: &str = "No plan selected";

/// Template parameters handed to a submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    pub pages_count: usize,
    pub pages_names: String,
    pub theme: String,
    pub title: String,
    pub description: String,
    pub logo: String,
    /// Data URL of the attached logo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_filename: Option<String>,
    pub inspiration: String,
    pub extras: String,
    pub contact_email: String,
}

impl SubmissionPayload {
    /// Flatten a record, reading and encoding the attached logo if any
    pub fn build(record: &FormRecord, include_plan: bool) -> BriefResult<Self> {
        let logo_data_url = match &record.logo_asset {
            Some(asset) => Some(asset.to_data_url()?),
            None => None,
        };
        Ok(Self::from_record(record, include_plan, logo_data_url))
    }

    /// Flatten a record using an already-encoded logo
    pub fn from_record(
        record: &FormRecord,
        include_plan: bool,
        logo_data_url: Option<String>,
    ) -> Self {
        let plan = include_plan.then(|| format_plan(record.plan.as_deref()));
        let logo_filename = record.logo_asset.as_ref().map(|a| a.file_name.clone());

        Self {
            plan,
            pages_count: record.pages.count,
            pages_names: format_page_names(&record.pages),
            theme: record.theme.clone(),
            title: record.content.title.clone(),
            description: or_fallback(&record.content.description, NO_DESCRIPTION),
            logo: format_logo(record.logo_choice, logo_filename.as_deref()),
            logo_file: logo_data_url.filter(|_| logo_filename.is_some()),
            logo_filename,
            inspiration: or_fallback(&record.inspiration, NO_INSPIRATION),
            extras: format_extras(&record.extras),
            contact_email: record.contact_email.clone(),
        }
    }

    /// Key/value pairs in template order, for logging and display
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::with_capacity(12);
        if let Some(plan) = &self.plan {
            entries.push(("plan", plan.clone()));
        }
        entries.push(("pages_count", self.pages_count.to_string()));
        entries.push(("pages_names", self.pages_names.clone()));
        entries.push(("theme", self.theme.clone()));
        entries.push(("title", self.title.clone()));
        entries.push(("description", self.description.clone()));
        entries.push(("logo", self.logo.clone()));
        if let Some(name) = &self.logo_filename {
            entries.push(("logo_filename", name.clone()));
        }
        if let Some(data) = &self.logo_file {
            entries.push(("logo_file", format!("<{} chars>", data.len())));
        }
        entries.push(("inspiration", self.inspiration.clone()));
        entries.push(("extras", self.extras.clone()));
        entries.push(("contact_email", self.contact_email.clone()));
        entries
    }
}

/// `value`, or `fallback` when it is empty
pub(crate) fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Non-blank page names joined with ", "
pub fn format_page_names(pages: &PageSelection) -> String {
    let named: Vec<&str> = pages.named().collect();
    if named.is_empty() {
        DEFAULT_PAGE_NAMING.to_string()
    } else {
        named.join(", ")
    }
}

/// Extra ids joined with ", "
pub fn format_extras(extras: &[String]) -> String {
    if extras.is_empty() {
        NO_EXTRAS.to_string()
    } else {
        extras.join(", ")
    }
}

/// Logo choice, with the attached file name when there is one
pub fn format_logo(choice: LogoChoice, file_name: Option<&str>) -> String {
    match (choice, file_name) {
        (LogoChoice::None, _) => NO_LOGO_OPTION.to_string(),
        (choice, Some(name)) => format!("{} - File: {}", choice.value(), name),
        (choice, None) => choice.value().to_string(),
    }
}

/// Plan display name, falling back to the raw id
pub fn format_plan(plan: Option<&str>) -> String {
    match plan {
        Some(id) if !id.is_empty() => catalog::find_plan(id)
            .map(|p| p.name.to_string())
            .unwrap_or_else(|| id.to_string()),
        _ => NO_PLAN.to_string(),
    }
}
