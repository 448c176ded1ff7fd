//! Contact step: where to send the follow-up

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::widgets::render_text_field;

use super::{intro_lines, is_edit_key};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(intro_lines(
            "Contact Information",
            "We'll use this email to get in touch about your website",
        )),
        chunks[0],
    );

    render_text_field(frame, chunks[1], &app.email_input, true);

    if let Some(message) = app.controller.email_feedback() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red),
            ))),
            chunks[2],
        );
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let code = key.code;
    if !is_edit_key(code) {
        return false;
    }
    if app.email_input.handle_edit_key(code) {
        app.commit_email();
    }
    true
}
