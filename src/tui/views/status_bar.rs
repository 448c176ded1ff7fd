//! Status bar view
//!
//! Shows the status message on the left and key hints on the right

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::wizard::Step;

/// Key hints for the current step
pub fn hints(app: &App) -> &'static str {
    if app.controller.is_submitting() {
        return " Ctrl+C:Quit ";
    }
    match app.current_step() {
        Step::Review => " Enter:Submit  PgUp:Back  Esc:Quit ",
        Step::Extras => " Space:Toggle  Tab:Move  Enter:Next  PgUp:Back  Esc:Quit ",
        Step::Plan | Step::Theme | Step::Inspiration => {
            " Enter:Select/Next  Tab:Move  PgUp:Back  Esc:Quit "
        }
        _ => " Tab:Move  Enter:Next  PgUp:Back  Esc:Quit ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
