//! Reusable widgets for the TUI

pub mod input;
pub mod notification;

pub use input::{render_text_field, TextInput};
pub use notification::{Toast, ToastKind, ToastQueue, ToastWidget};
