//! Content step: title, description and logo

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::logo::format_size;
use crate::models::LogoChoice;
use crate::tui::app::App;
use crate::tui::widgets::render_text_field;

use super::{intro_lines, is_edit_key};

const TITLE_ROW: usize = 0;
const DESCRIPTION_ROW: usize = 1;
const LOGO_CHOICE_ROW: usize = 2;
const LOGO_FILE_ROW: usize = 3;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Intro
            Constraint::Length(1), // Title
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Logo choice
            Constraint::Length(2), // Logo file
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(intro_lines(
            "Website Content",
            "Tell us about your website and how you'd like to handle the logo",
        )),
        chunks[0],
    );

    render_text_field(frame, chunks[1], &app.title_input, app.focus == TITLE_ROW);
    render_text_field(
        frame,
        chunks[2],
        &app.description_input,
        app.focus == DESCRIPTION_ROW,
    );

    let record = app.controller.record();
    let focused = app.focus == LOGO_CHOICE_ROW;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut choice_spans = vec![Span::styled("Logo: ", label_style)];
    for choice in LogoChoice::SELECTABLE {
        let style = if *choice == record.logo_choice {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        choice_spans.push(Span::styled(format!(" {} ", choice.label()), style));
        choice_spans.push(Span::raw(" "));
    }
    let hint = if record.logo_choice == LogoChoice::None {
        "Use ◀ ▶ to choose"
    } else {
        record.logo_choice.description()
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(choice_spans),
            Line::from(Span::styled(
                format!("      {}", hint),
                Style::default().fg(Color::DarkGray),
            )),
        ]),
        chunks[4],
    );

    if record.logo_choice != LogoChoice::Upload {
        return;
    }

    let status = match (&app.attach_error, &record.logo_asset) {
        (Some(err), _) => Line::from(Span::styled(
            format!("      {}", err),
            Style::default().fg(Color::Red),
        )),
        (None, Some(asset)) => Line::from(Span::styled(
            format!(
                "      Attached {} ({})",
                asset.file_name,
                format_size(asset.size)
            ),
            Style::default().fg(Color::Green),
        )),
        (None, None) => Line::from(Span::styled(
            "      Press Enter to attach",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let file_area = chunks[5];
    let field_area = Rect { height: 1, ..file_area };
    let status_area = Rect {
        y: file_area.y + 1,
        height: file_area.height.saturating_sub(1),
        ..file_area
    };
    render_text_field(
        frame,
        field_area,
        &app.logo_path_input,
        app.focus == LOGO_FILE_ROW,
    );
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Step through the logo choices, wrapping at either end
fn cycle_logo(current: LogoChoice, forward: bool) -> LogoChoice {
    let choices = LogoChoice::SELECTABLE;
    let position = choices.iter().position(|c| *c == current);
    let index = match (position, forward) {
        (None, true) => 0,
        (None, false) => choices.len() - 1,
        (Some(i), true) => (i + 1) % choices.len(),
        (Some(i), false) => (i + choices.len() - 1) % choices.len(),
    };
    choices[index]
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let code = key.code;
    match app.focus {
        TITLE_ROW | DESCRIPTION_ROW => {
            if !is_edit_key(code) {
                return false;
            }
            let input = if app.focus == TITLE_ROW {
                &mut app.title_input
            } else {
                &mut app.description_input
            };
            if input.handle_edit_key(code) {
                app.commit_content();
            }
            true
        }
        LOGO_CHOICE_ROW => match code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                let current = app.controller.record().logo_choice;
                let next = cycle_logo(current, code != KeyCode::Left);
                app.select_logo_choice(next);
                true
            }
            _ => false,
        },
        LOGO_FILE_ROW => match code {
            KeyCode::Enter => {
                let attached = app
                    .controller
                    .record()
                    .logo_asset
                    .as_ref()
                    .map(|a| a.path.display().to_string());
                let typed = app.logo_path_input.value().trim();
                let typed = (!typed.is_empty()).then_some(typed);
                // Nothing new to attach or detach: let Enter move on
                if attached.as_deref() == typed {
                    return false;
                }
                app.attach_logo_from_input();
                true
            }
            code if is_edit_key(code) => {
                app.logo_path_input.handle_edit_key(code);
                app.attach_error = None;
                true
            }
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_logo_wraps() {
        assert_eq!(cycle_logo(LogoChoice::None, true), LogoChoice::Upload);
        assert_eq!(cycle_logo(LogoChoice::None, false), LogoChoice::Skip);
        assert_eq!(cycle_logo(LogoChoice::Skip, true), LogoChoice::Upload);
        assert_eq!(cycle_logo(LogoChoice::Upload, false), LogoChoice::Skip);
    }
}
