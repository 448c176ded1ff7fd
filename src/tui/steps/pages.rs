//! Pages step: how many pages and what to call them

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::catalog::MAX_PAGE_COUNT;
use crate::tui::app::App;
use crate::tui::widgets::render_text_field;

use super::{intro_lines, is_edit_key};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut constraints = vec![
        Constraint::Length(3), // Intro
        Constraint::Length(2), // Count picker
    ];
    constraints.extend(app.page_inputs.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new(intro_lines(
            "How many pages do you need?",
            "Name each page, or leave the names blank and we'll pick them",
        )),
        chunks[0],
    );

    let count = app.controller.record().pages.count;
    let focused = app.focus == 0;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let arrow = |enabled: bool, glyph: &'static str| {
        let color = if enabled { Color::White } else { Color::DarkGray };
        Span::styled(glyph, Style::default().fg(color))
    };
    let picker = Line::from(vec![
        Span::styled("Number of pages: ", label_style),
        arrow(count > 1, "◀ "),
        Span::styled(
            count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        arrow(count < MAX_PAGE_COUNT, " ▶"),
        Span::styled(
            format!("  (1-{})", MAX_PAGE_COUNT),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(picker), chunks[1]);

    for (i, input) in app.page_inputs.iter().enumerate() {
        render_text_field(frame, chunks[2 + i], input, app.focus == i + 1);
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if app.focus == 0 {
        return match key.code {
            KeyCode::Left | KeyCode::Char('-') => {
                app.adjust_page_count(-1);
                true
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                app.adjust_page_count(1);
                true
            }
            _ => false,
        };
    }

    let code = key.code;
    if !is_edit_key(code) {
        return false;
    }
    let index = app.focus - 1;
    let changed = app
        .page_inputs
        .get_mut(index)
        .is_some_and(|input| input.handle_edit_key(code));
    if changed {
        app.commit_page_name(index);
    }
    true
}
