//! Review step: everything the client entered, before submitting

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::models::catalog;
use crate::models::FormRecord;
use crate::tui::app::App;
use crate::wizard::payload::{
    format_logo, format_page_names, format_plan, or_fallback, NO_DESCRIPTION, NO_EXTRAS,
    NO_INSPIRATION,
};

use super::intro_lines;

/// Label/value pairs shown on the review screen
pub fn summary_rows(record: &FormRecord, include_plan: bool) -> Vec<(&'static str, String)> {
    let mut rows = Vec::with_capacity(9);
    if include_plan {
        rows.push(("Plan", format_plan(record.plan.as_deref())));
    }
    rows.push(("Pages", record.pages.count.to_string()));
    rows.push(("Page names", format_page_names(&record.pages)));
    rows.push(("Theme", record.theme.clone()));
    rows.push(("Title", record.content.title.clone()));
    rows.push((
        "Description",
        or_fallback(&record.content.description, NO_DESCRIPTION),
    ));

    let file_name = record.logo_asset.as_ref().map(|a| a.file_name.as_str());
    let logo = format_logo(record.logo_choice, file_name);
    rows.push(("Logo", logo));

    rows.push(("Inspiration", or_fallback(&record.inspiration, NO_INSPIRATION)));

    let extras = if record.extras.is_empty() {
        NO_EXTRAS.to_string()
    } else {
        record
            .extras
            .iter()
            .map(|id| catalog::extra_name(id))
            .collect::<Vec<_>>()
            .join(", ")
    };
    rows.push(("Extras", extras));
    rows.push(("Email", record.contact_email.clone()));
    rows
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(area);

    frame.render_widget(
        Paragraph::new(intro_lines(
            "Review Your Information",
            "Check the details below, then press Enter to submit",
        )),
        chunks[0],
    );

    let rows = summary_rows(app.controller.record(), app.controller.includes_plan());
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 2;
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", format!("{}:", label), width = label_width),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[1],
    );
}
