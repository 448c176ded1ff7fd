//! Quit confirmation
//!
//! Nothing is saved between sessions, so leaving before the review step is
//! submitted throws the answers away.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Warning shown in the dialog body
pub fn warning(app: &App) -> String {
    let controller = &app.controller;
    let reached = controller.current_index() + 1;
    if reached == 1 {
        "Your answers have not been sent and will be lost.".to_string()
    } else {
        format!(
            "Answers from {} of {} steps have not been sent and will be lost.",
            reached,
            controller.step_count()
        )
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Quit SiteBrief? ")
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };
    let lines = vec![
        Line::from(""),
        Line::from(warning(app)),
        Line::from(Span::styled(
            "Go to the review step and press Enter to send them.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            key("y", Color::Red),
            Span::raw(" quit    "),
            key("n", Color::Green),
            Span::raw(" / "),
            key("Esc", Color::Green),
            Span::raw(" back to the form"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
