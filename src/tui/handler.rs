//! Event handler for the TUI
//!
//! Routes keys to the quit confirmation, the current step, or wizard
//! navigation, in that order.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;
use super::steps;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.toasts.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Submitted(outcome) => {
            app.finish_submit(outcome);
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.confirm_quit {
        return handle_confirm_key(app, key);
    }

    // Everything is frozen while a submission is in flight
    if app.controller.is_submitting() {
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => {
            app.confirm_quit = true;
            return Ok(());
        }
        KeyCode::Char('n') if ctrl => {
            app.next_step();
            return Ok(());
        }
        KeyCode::Char('p') if ctrl => {
            app.prev_step();
            return Ok(());
        }
        KeyCode::Char('s') if ctrl => {
            submit_or_advance(app);
            return Ok(());
        }
        KeyCode::PageDown => {
            app.next_step();
            return Ok(());
        }
        KeyCode::PageUp => {
            app.prev_step();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return Ok(());
        }
        _ if ctrl => return Ok(()),
        _ => {}
    }

    if steps::handle_key(app, key) {
        return Ok(());
    }

    if key.code == KeyCode::Enter {
        submit_or_advance(app);
    }
    Ok(())
}

/// Submit on the review step, otherwise move forward
fn submit_or_advance(app: &mut App) {
    if app.controller.is_last_step() {
        app.start_submit();
    } else {
        app.next_step();
    }
}

/// Handle keys while the quit confirmation is showing
fn handle_confirm_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.quit(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_quit = false,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    use crate::error::{BriefError, BriefResult};
    use crate::models::catalog::{TEMPLATES, THEMES};
    use crate::sink::SubmissionSink;
    use crate::wizard::{Step, SubmissionPayload, WizardController};

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        fn send(&self, _payload: &SubmissionPayload) -> BriefResult<()> {
            Err(BriefError::Submission("offline".into()))
        }
    }

    fn test_app() -> (App, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel();
        let app = App::new(WizardController::default(), Arc::new(FailingSink), tx);
        (app, rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut app, _rx) = test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_asks_before_quitting() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.confirm_quit);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.confirm_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_page_count_and_names() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.record().pages.count, 3);

        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Home");
        assert_eq!(app.controller.record().pages.names[0], "Home");
    }

    #[test]
    fn test_enter_selects_then_advances() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Theme);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.record().theme, THEMES[0].label());
        assert_eq!(app.current_step(), Step::Theme);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Content);
    }

    #[test]
    fn test_blocked_enter_keeps_step() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Content);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Content);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_enter_on_empty_logo_file_row_advances() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Enter); // Pages
        press(&mut app, KeyCode::Enter); // Theme: select
        press(&mut app, KeyCode::Enter); // Theme: advance

        type_text(&mut app, "Acme");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right); // Upload
        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, 3);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Inspiration);
        assert!(app.controller.record().logo_asset.is_none());
    }

    #[test]
    fn test_enter_on_logo_file_row_attaches_first() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("logo.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Acme");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        type_text(&mut app, &path.display().to_string());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Content);
        assert!(app.controller.record().logo_asset.is_some());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Inspiration);
    }

    #[test]
    fn test_full_walkthrough_failure_preserves_state() {
        let (mut app, rx) = test_app();

        press(&mut app, KeyCode::Enter); // Pages
        press(&mut app, KeyCode::Enter); // Theme: select
        press(&mut app, KeyCode::Enter); // Theme: advance

        type_text(&mut app, "Acme");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right); // Upload
        press(&mut app, KeyCode::Right); // Design
        assert_eq!(app.controller.record().content.title, "Acme");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Inspiration);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.record().inspiration, TEMPLATES[0].name);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Extras);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.controller.record().extras.len(), 1);
        press(&mut app, KeyCode::Enter);

        type_text(&mut app, "bad");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Contact);
        type_text(&mut app, "@example.com");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Step::Review);

        press(&mut app, KeyCode::Enter);
        assert!(app.controller.is_submitting());

        // Keys are ignored while the worker runs
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.current_step(), Step::Review);

        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        handle_event(&mut app, event).unwrap();

        assert!(!app.controller.is_submitting());
        assert_eq!(app.current_step(), Step::Review);
        assert_eq!(app.controller.record().contact_email, "bad@example.com");
        assert_eq!(app.toasts.current().unwrap().title, "Submission Failed");
    }
}
