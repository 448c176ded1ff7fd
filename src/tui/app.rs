//! Application state for the TUI
//!
//! The App wraps the wizard controller with everything the terminal needs:
//! text inputs for each free-text field, the focused row of the current
//! step, toasts, and the channel submission workers report on.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::error::BriefError;
use crate::models::catalog;
use crate::models::{FormPatch, LogoAsset, LogoChoice};
use crate::sink::SubmissionSink;
use crate::wizard::{Step, WizardController};

use super::event::Event;
use super::widgets::{TextInput, Toast, ToastQueue};

const PAGE_PLACEHOLDERS: &[&str] = &["Home", "About", "Services"];

/// Main application state
pub struct App {
    pub controller: WizardController,

    sink: Arc<dyn SubmissionSink>,

    /// Where submission workers send their outcome
    events: mpsc::Sender<Event>,

    pub should_quit: bool,

    /// Quit confirmation is showing
    pub confirm_quit: bool,

    /// Focused row within the current step
    pub focus: usize,

    pub page_inputs: Vec<TextInput>,
    pub title_input: TextInput,
    pub description_input: TextInput,
    pub logo_path_input: TextInput,
    pub email_input: TextInput,

    /// Message next to the logo file field
    pub attach_error: Option<String>,

    pub toasts: ToastQueue,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    pub fn new(
        controller: WizardController,
        sink: Arc<dyn SubmissionSink>,
        events: mpsc::Sender<Event>,
    ) -> Self {
        let mut app = Self {
            controller,
            sink,
            events,
            should_quit: false,
            confirm_quit: false,
            focus: 0,
            page_inputs: Vec::new(),
            title_input: TextInput::new(),
            description_input: TextInput::new(),
            logo_path_input: TextInput::new(),
            email_input: TextInput::new(),
            attach_error: None,
            toasts: ToastQueue::new(),
            status_message: None,
        };
        app.load_inputs();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn current_step(&self) -> Step {
        self.controller.current_step()
    }

    /// Rebuild every text input from the record
    pub fn load_inputs(&mut self) {
        let record = self.controller.record().clone();

        self.title_input = TextInput::new()
            .label("Website Title *")
            .placeholder("e.g., Your Business Name")
            .content(record.content.title);
        self.description_input = TextInput::new()
            .label("Short Description")
            .placeholder("Brief description of what your business does...")
            .content(record.content.description);
        self.email_input = TextInput::new()
            .label("Email Address *")
            .placeholder("your.email@example.com")
            .content(record.contact_email);
        self.logo_path_input = TextInput::new()
            .label("Logo file")
            .placeholder("Path to a PNG or SVG, up to 5 MB")
            .content(
                record
                    .logo_asset
                    .map(|a| a.path.display().to_string())
                    .unwrap_or_default(),
            );
        self.sync_page_inputs();
        self.attach_error = None;
    }

    /// Match the page-name inputs to the record's page list
    pub fn sync_page_inputs(&mut self) {
        let names = &self.controller.record().pages.names;
        self.page_inputs = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                TextInput::new()
                    .label(format!("Page {}", i + 1))
                    .placeholder(format!(
                        "e.g., {}",
                        PAGE_PLACEHOLDERS.get(i).copied().unwrap_or("Contact")
                    ))
                    .content(name.clone())
            })
            .collect();
    }

    /// Number of focusable rows on the current step
    pub fn row_count(&self) -> usize {
        let record = self.controller.record();
        match self.current_step() {
            Step::Plan => catalog::PLANS.len(),
            Step::Pages => 1 + record.pages.count,
            Step::Theme => catalog::THEMES.len(),
            Step::Content => {
                if record.logo_choice == LogoChoice::Upload {
                    4
                } else {
                    3
                }
            }
            Step::Inspiration => catalog::TEMPLATES.len(),
            Step::Extras => catalog::extras_for_plan(record.plan.as_deref()).len(),
            Step::Contact => 1,
            Step::Review => 0,
        }
    }

    pub fn focus_next(&mut self) {
        let rows = self.row_count();
        if rows > 0 {
            self.focus = (self.focus + 1) % rows;
        }
    }

    pub fn focus_prev(&mut self) {
        let rows = self.row_count();
        if rows > 0 {
            self.focus = (self.focus + rows - 1) % rows;
        }
    }

    /// Keep the focus inside the current step after its rows change
    pub fn clamp_focus(&mut self) {
        let rows = self.row_count();
        if self.focus >= rows {
            self.focus = rows.saturating_sub(1);
        }
    }

    /// Advance to the next step, or explain why not
    pub fn next_step(&mut self) {
        if self.controller.next() {
            self.focus = 0;
            self.clear_status();
        } else if let Some(reason) = self.controller.blocking_reason() {
            self.set_status(reason);
        }
    }

    pub fn prev_step(&mut self) {
        if self.controller.back() {
            self.focus = 0;
            self.clear_status();
        }
    }

    /// Push the title and description inputs into the record
    pub fn commit_content(&mut self) {
        self.controller.update_field(FormPatch::content(
            self.title_input.value(),
            self.description_input.value(),
        ));
    }

    pub fn commit_email(&mut self) {
        self.controller
            .update_field(FormPatch::contact_email(self.email_input.value()));
    }

    pub fn commit_page_name(&mut self, index: usize) {
        if let Some(input) = self.page_inputs.get(index) {
            let name = input.value().to_string();
            self.controller.set_page_name(index, name);
        }
    }

    /// Change the page count by `delta`, staying within 1..=10
    pub fn adjust_page_count(&mut self, delta: isize) {
        let current = self.controller.record().pages.count as isize;
        let target = (current + delta).clamp(1, catalog::MAX_PAGE_COUNT as isize) as usize;
        if self.controller.handle_page_count_change(target).is_ok() {
            self.sync_page_inputs();
            self.clamp_focus();
        }
    }

    pub fn select_logo_choice(&mut self, choice: LogoChoice) {
        self.controller.handle_logo_selection(choice);
        if choice != LogoChoice::Upload {
            self.logo_path_input.clear();
            self.attach_error = None;
        }
        self.clamp_focus();
    }

    /// Attach the file named in the logo path input
    pub fn attach_logo_from_input(&mut self) {
        let path = self.logo_path_input.value().trim().to_string();
        if path.is_empty() {
            self.controller.detach_logo();
            self.attach_error = None;
            return;
        }

        let result =
            LogoAsset::from_path(&path).and_then(|asset| self.controller.handle_file_attach(asset));
        match result {
            Ok(()) => {
                self.attach_error = None;
                let name = self
                    .controller
                    .record()
                    .logo_asset
                    .as_ref()
                    .map(|a| a.file_name.clone())
                    .unwrap_or_default();
                self.toasts.push(Toast::info("Logo attached", name));
            }
            Err(BriefError::FileRejected(msg)) => self.attach_error = Some(msg),
            Err(err) => self.attach_error = Some(err.to_string()),
        }
    }

    /// Start delivering the form on a worker thread
    pub fn start_submit(&mut self) {
        let payload = match self.controller.begin_submit() {
            Ok(payload) => payload,
            Err(err) => {
                self.toasts
                    .push(Toast::error("Submission Failed", err.to_string()));
                return;
            }
        };

        self.set_status("Submitting...");
        let sink = Arc::clone(&self.sink);
        let events = self.events.clone();
        thread::spawn(move || {
            let outcome = sink.send(&payload).map_err(|e| e.to_string());
            // The receiver is gone only when the app is shutting down
            let _ = events.send(Event::Submitted(outcome));
        });
    }

    /// Apply a worker's outcome
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.clear_status();
        match self
            .controller
            .finish_submit(outcome.map_err(BriefError::Submission))
        {
            Ok(()) => {
                self.focus = 0;
                self.load_inputs();
                self.toasts.push(Toast::success(
                    "Form Submitted Successfully!",
                    "We'll contact you soon.",
                ));
            }
            Err(err) => {
                tracing::debug!(error = %err, "showing submission failure");
                self.toasts
                    .push(Toast::error("Submission Failed", "Please try again."));
            }
        }
    }
}
