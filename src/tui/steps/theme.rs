//! Theme step: pick one of the color palettes

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::models::catalog::THEMES;
use crate::models::FormPatch;
use crate::tui::app::App;

use super::{intro_lines, render_choices, ChoiceRow};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(area);

    frame.render_widget(
        Paragraph::new(intro_lines(
            "Choose Your Color Theme",
            "Select a color palette that represents your brand",
        )),
        chunks[0],
    );

    let stored = &app.controller.record().theme;
    let rows = THEMES
        .iter()
        .map(|t| ChoiceRow {
            title: t.name.to_string(),
            detail: format!("{}  {}", t.description, t.colors.join(" ")),
            selected: t.matches(stored),
        })
        .collect();
    render_choices(frame, chunks[1], rows, app.focus, false);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let Some(theme) = THEMES.get(app.focus) else {
        return false;
    };
    match key.code {
        KeyCode::Char(' ') => {
            app.controller.update_field(FormPatch::theme(theme.label()));
            true
        }
        KeyCode::Enter if !theme.matches(&app.controller.record().theme) => {
            app.controller.update_field(FormPatch::theme(theme.label()));
            true
        }
        _ => false,
    }
}
