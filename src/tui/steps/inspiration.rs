//! Inspiration step: pick a template whose look the client likes

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::models::catalog::TEMPLATES;
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
            "Design Inspiration",
            "Pick the template closest to the look you want; open the link to preview it",
        )),
        chunks[0],
    );

    let selected = &app.controller.record().inspiration;
    let rows = TEMPLATES
        .iter()
        .map(|t| ChoiceRow {
            title: t.name.to_string(),
            detail: t.preview.to_string(),
            selected: t.name == selected,
        })
        .collect();
    render_choices(frame, chunks[1], rows, app.focus, false);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let Some(template) = TEMPLATES.get(app.focus) else {
        return false;
    };
    let already = app.controller.record().inspiration == template.name;
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter if !already => {
            app.controller
                .update_field(FormPatch::inspiration(template.name));
            true
        }
        KeyCode::Char(' ') => true,
        _ => false,
    }
}
