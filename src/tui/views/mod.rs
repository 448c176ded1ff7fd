//! TUI Views module
//!
//! The wizard card: header, progress bar, the current step, and the
//! navigation row, with toasts and the quit confirmation on top.

pub mod status_bar;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::app::App;
use super::dialogs;
use super::layout::{toast_area, WizardLayout};
use super::steps;
use super::widgets::ToastWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = WizardLayout::new(frame.area());

    let block = Block::default()
        .title(" Website Requirements ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, layout.card);

    render_header(frame, app, layout.header);
    render_progress(frame, app, layout.progress);
    steps::render(frame, app, layout.body);
    render_nav(frame, app, layout.nav);

    status_bar::render(frame, app, layout.status_bar);

    if let Some(toast) = app.toasts.current() {
        frame.render_widget(ToastWidget::new(toast), toast_area(frame.area()));
    }

    if app.confirm_quit {
        dialogs::quit::render(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let controller = &app.controller;
    let step = controller.current_step();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    let mut title = vec![Span::styled(
        format!("Step {}: {}", controller.current_index() + 1, step.title()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if step.is_optional() {
        title.push(Span::styled(
            " (optional)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

    frame.render_widget(
        Paragraph::new(format!(
            "{} of {}",
            controller.current_index() + 1,
            controller.step_count()
        ))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(app.controller.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}

fn button(label: &str, enabled: bool, primary: bool) -> Span<'static> {
    let style = match (enabled, primary) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White),
    };
    Span::styled(format!("[ {} ]", label), style)
}

fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let controller = &app.controller;
    let submitting = controller.is_submitting();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let back = button("Back", !controller.is_first_step() && !submitting, false);
    frame.render_widget(Paragraph::new(Line::from(back)), chunks[0]);

    let forward = if controller.is_last_step() {
        let label = if submitting { "Submitting..." } else { "Submit" };
        button(label, !submitting, true)
    } else {
        button("Next", controller.can_proceed(), true)
    };
    frame.render_widget(
        Paragraph::new(Line::from(forward)).alignment(Alignment::Right),
        chunks[1],
    );
}
