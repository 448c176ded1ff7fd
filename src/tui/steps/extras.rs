//! Extras step: optional add-on services

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::models::catalog::extras_for_plan;
use crate::tui::app::App;

use super::{intro_lines, render_choices, ChoiceRow};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(area);

    frame.render_widget(
        Paragraph::new(intro_lines(
            "Choose Additional Services",
            "Space toggles a service; all of them are optional",
        )),
        chunks[0],
    );

    let record = app.controller.record();
    let rows = extras_for_plan(record.plan.as_deref())
        .into_iter()
        .map(|e| ChoiceRow {
            title: format!("{} ({})", e.name, e.price),
            detail: e.description.to_string(),
            selected: record.has_extra(e.id),
        })
        .collect();
    render_choices(frame, chunks[1], rows, app.focus, true);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code != KeyCode::Char(' ') {
        return false;
    }
    let offered = extras_for_plan(app.controller.record().plan.as_deref());
    if let Some(extra) = offered.get(app.focus) {
        app.controller.toggle_extra(extra.id);
    }
    true
}
