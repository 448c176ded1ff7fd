//! Catalog and settings formatting
//!
//! Renders the options the wizard offers as tables, so they can be checked
//! without opening the TUI.

use tabled::{settings::Style, Table, Tabled};

use crate::config::{Settings, SiteBriefPaths, SinkKind};
use crate::models::catalog::{extras_for_plan, BASE_EXTRAS, PLANS, TEMPLATES, THEMES};
use crate::models::LogoChoice;

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Plan")]
    name: &'static str,
    #[tabled(rename = "Features")]
    features: String,
    #[tabled(rename = "Plan extras")]
    extras: String,
}

#[derive(Tabled)]
struct ThemeRow {
    #[tabled(rename = "Theme")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Colors")]
    colors: String,
}

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "Template")]
    name: &'static str,
    #[tabled(rename = "Preview")]
    preview: &'static str,
}

#[derive(Tabled)]
struct ExtraRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Service")]
    name: &'static str,
    #[tabled(rename = "Price")]
    price: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

#[derive(Tabled)]
struct LogoRow {
    #[tabled(rename = "Value")]
    value: &'static str,
    #[tabled(rename = "Option")]
    label: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Extras a plan adds on top of the base list
fn plan_only_extras(plan: &str) -> String {
    let added: Vec<&str> = extras_for_plan(Some(plan))
        .into_iter()
        .filter(|e| !BASE_EXTRAS.iter().any(|b| b.id == e.id))
        .map(|e| e.name)
        .collect();
    if added.is_empty() {
        "-".to_string()
    } else {
        added.join(", ")
    }
}

/// Every option the wizard offers, one table per step
pub fn format_catalog() -> String {
    let mut output = String::new();

    output.push_str("Plans\n");
    output.push_str(&table(PLANS.iter().map(|p| PlanRow {
        id: p.id,
        name: p.name,
        features: p.features.join(", "),
        extras: plan_only_extras(p.id),
    })));

    output.push_str("\n\nThemes\n");
    output.push_str(&table(THEMES.iter().map(|t| ThemeRow {
        name: t.name,
        description: t.description,
        colors: t.colors.join(" "),
    })));

    output.push_str("\n\nLogo options\n");
    output.push_str(&table(LogoChoice::SELECTABLE.iter().map(|c| LogoRow {
        value: c.value(),
        label: c.label(),
        description: c.description(),
    })));

    output.push_str("\n\nTemplates\n");
    output.push_str(&table(TEMPLATES.iter().map(|t| TemplateRow {
        name: t.name,
        preview: t.preview,
    })));

    output.push_str("\n\nExtras\n");
    output.push_str(&table(BASE_EXTRAS.iter().map(|e| ExtraRow {
        id: e.id,
        name: e.name,
        price: e.price,
        description: e.description,
    })));
    output.push('\n');

    output
}

/// Current configuration, as shown by the `config` command
pub fn format_settings(settings: &Settings, paths: &SiteBriefPaths) -> String {
    let mut output = String::new();
    output.push_str(&format!("Data directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Config file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!("Logs:           {}\n", paths.logs_dir().display()));
    output.push_str(&format!("Wizard variant: {}\n", settings.wizard_variant));
    output.push_str(&format!("Sink:           {}\n", settings.sink));
    output.push_str(&format!("Log level:      {}\n", settings.logging.level));

    if settings.sink == SinkKind::Emailjs {
        let emailjs = &settings.emailjs;
        let key_state = if emailjs.resolved_public_key().is_empty() {
            "not set"
        } else {
            "set"
        };
        output.push_str(&format!("EmailJS endpoint: {}\n", emailjs.endpoint));
        output.push_str(&format!("EmailJS service:  {}\n", emailjs.service_id));
        output.push_str(&format!("EmailJS template: {}\n", emailjs.template_id));
        output.push_str(&format!("EmailJS key:      {}\n", key_state));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_catalog_lists_every_step() {
        let output = format_catalog();
        for heading in ["Plans", "Themes", "Logo options", "Templates", "Extras"] {
            assert!(output.contains(heading), "missing {heading}");
        }
        assert!(output.contains("Modern Blue"));
        assert!(output.contains("Premium Payment Gateway"));
    }

    #[test]
    fn test_plan_only_extras() {
        assert_eq!(plan_only_extras("landing"), "-");
        assert!(plan_only_extras("booking").contains("Calendar"));
    }

    #[test]
    fn test_format_settings_hides_key() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SiteBriefPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.sink = SinkKind::Emailjs;
        settings.emailjs.public_key = "secret-key".into();

        let output = format_settings(&settings, &paths);
        assert!(output.contains("EmailJS key:      set"));
        assert!(!output.contains("secret-key"));
    }
}
