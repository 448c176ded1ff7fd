//! Plan step: the kind of website being ordered

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::models::catalog::PLANS;
use crate::tui::app::App;

use super::{intro_lines, render_choices, ChoiceRow};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(area);

    frame.render_widget(
        Paragraph::new(intro_lines(
            "Choose Your Website Plan",
            "Select the type of website that best fits your needs",
        )),
        chunks[0],
    );

    let current = app.controller.record().plan.as_deref();
    let rows = PLANS
        .iter()
        .map(|p| ChoiceRow {
            title: p.name.to_string(),
            detail: format!("{} · {}", p.description, p.features.join(", ")),
            selected: current == Some(p.id),
        })
        .collect();
    render_choices(frame, chunks[1], rows, app.focus, false);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let Some(plan) = PLANS.get(app.focus) else {
        return false;
    };
    let already = app.controller.record().plan.as_deref() == Some(plan.id);
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter if !already => {
            app.controller.select_plan(plan.id);
            true
        }
        KeyCode::Char(' ') => true,
        _ => false,
    }
}
