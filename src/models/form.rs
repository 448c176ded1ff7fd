//! The aggregate form record
//!
//! One `FormRecord` accumulates everything the client enters across the
//! wizard. It lives only for the session and is reset after a successful
//! submission.

use serde::{Deserialize, Serialize};

use super::logo::{LogoAsset, LogoChoice};

/// Number of pages plus their optional names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSelection {
    pub count: usize,
    /// Always `count` entries long; blank entries mean default naming
    pub names: Vec<String>,
}

impl PageSelection {
    /// A selection of `count` pages, all unnamed
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            names: vec![String::new(); count],
        }
    }

    /// Copy of this selection resized to `count`, keeping names by index
    pub fn resized(&self, count: usize) -> Self {
        let names = (0..count)
            .map(|i| self.names.get(i).cloned().unwrap_or_default())
            .collect();
        Self { count, names }
    }

    /// Names that are not blank, in page order
    pub fn named(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
    }
}

impl Default for PageSelection {
    fn default() -> Self {
        Self::with_count(1)
    }
}

/// Website title and description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDetails {
    pub title: String,
    pub description: String,
}

/// Everything collected by the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Website plan; only asked for by the plan-enabled wizard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    pub pages: PageSelection,
    /// Theme label, e.g. "Modern Blue - Professional and trustworthy"
    pub theme: String,
    pub content: ContentDetails,
    pub logo_choice: LogoChoice,
    /// Present only while `logo_choice` is `Upload`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_asset: Option<LogoAsset>,
    /// Name of the selected inspiration template
    pub inspiration: String,
    /// Selected extra-service ids
    pub extras: Vec<String>,
    pub contact_email: String,
}

impl FormRecord {
    pub fn has_extra(&self, id: &str) -> bool {
        self.extras.iter().any(|e| e == id)
    }

    /// Add the extra if absent, remove it if present
    pub fn toggle_extra(&mut self, id: &str) {
        if self.has_extra(id) {
            self.extras.retain(|e| e != id);
        } else {
            self.extras.push(id.to_string());
        }
    }
}

/// A partial update to a `FormRecord`
///
/// Fields left as `None` are untouched. Nested values (`pages`, `content`)
/// replace the current value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub plan: Option<String>,
    pub pages: Option<PageSelection>,
    pub theme: Option<String>,
    pub content: Option<ContentDetails>,
    pub logo_choice: Option<LogoChoice>,
    pub inspiration: Option<String>,
    pub extras: Option<Vec<String>>,
    pub contact_email: Option<String>,
}

impl FormPatch {
    pub fn theme(theme: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
            ..Default::default()
        }
    }

    pub fn inspiration(name: impl Into<String>) -> Self {
        Self {
            inspiration: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn content(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            content: Some(ContentDetails {
                title: title.into(),
                description: description.into(),
            }),
            ..Default::default()
        }
    }

    pub fn contact_email(email: impl Into<String>) -> Self {
        Self {
            contact_email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn pages(pages: PageSelection) -> Self {
        Self {
            pages: Some(pages),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
