//! Step renderers
//!
//! Each step has a `render` function that draws its fields from the form
//! record and a `handle_key` function that turns keys into record updates.
//! `handle_key` returns whether the key was consumed; unconsumed keys fall
//! back to wizard navigation.

pub mod contact;
pub mod content;
pub mod extras;
pub mod inspiration;
pub mod pages;
pub mod plan;
pub mod review;
pub mod theme;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::wizard::Step;

use super::app::App;

/// Draw the current step's body
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_step() {
        Step::Plan => plan::render(frame, app, area),
        Step::Pages => pages::render(frame, app, area),
        Step::Theme => theme::render(frame, app, area),
        Step::Content => content::render(frame, app, area),
        Step::Inspiration => inspiration::render(frame, app, area),
        Step::Extras => extras::render(frame, app, area),
        Step::Contact => contact::render(frame, app, area),
        Step::Review => review::render(frame, app, area),
    }
}

/// Route a key to the current step
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.current_step() {
        Step::Plan => plan::handle_key(app, key),
        Step::Pages => pages::handle_key(app, key),
        Step::Theme => theme::handle_key(app, key),
        Step::Content => content::handle_key(app, key),
        Step::Inspiration => inspiration::handle_key(app, key),
        Step::Extras => extras::handle_key(app, key),
        Step::Contact => contact::handle_key(app, key),
        Step::Review => false,
    }
}

/// One option in a selection list
pub(crate) struct ChoiceRow {
    pub title: String,
    pub detail: String,
    pub selected: bool,
}

/// Render a list of options with a radio/check marker and highlighted cursor
pub(crate) fn render_choices(
    frame: &mut Frame,
    area: Rect,
    rows: Vec<ChoiceRow>,
    cursor: usize,
    multi: bool,
) {
    let items: Vec<ListItem> = rows
        .into_iter()
        .map(|row| {
            let marker = match (multi, row.selected) {
                (true, true) => "[x] ",
                (true, false) => "[ ] ",
                (false, true) => "(•) ",
                (false, false) => "( ) ",
            };
            let title_style = if row.selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, title_style),
                    Span::styled(row.title, title_style),
                ]),
                Line::from(Span::styled(
                    format!("    {}", row.detail),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Heading line with a hint underneath
pub(crate) fn intro_lines(heading: &str, hint: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// Keys a focused text field handles itself
pub(crate) fn is_edit_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
    )
}
