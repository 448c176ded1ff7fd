//! Terminal User Interface module
//!
//! The questionnaire as a full-screen wizard built on ratatui: one step per
//! screen, a progress bar, and toasts for submission results.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Step screens
pub mod steps;

pub mod views;

pub mod widgets;

pub mod dialogs;

pub mod layout;

pub use app::App;
pub use terminal::run_tui;
