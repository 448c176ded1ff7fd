//! Dialogs drawn over the wizard

pub mod quit;
