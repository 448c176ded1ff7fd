//! Toast notifications
//!
//! Short-lived messages drawn in the top-right corner: submission results,
//! rejected files, and similar feedback.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Kind of toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Error => "x",
        }
    }
}

/// A titled toast with a one-line description
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, description).with_duration(Duration::from_secs(6))
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a toast
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.toast.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", self.toast.kind.icon(), self.toast.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.toast.description.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Toasts waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn remove_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// The toast to display (if any)
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    /// Drop the visible toast early
    pub fn dismiss(&mut self) {
        if !self.toasts.is_empty() {
            self.toasts.remove(0);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_kinds() {
        assert_eq!(ToastKind::Success.color(), Color::Green);
        assert_eq!(ToastKind::Error.color(), Color::Red);
        let toast = Toast::error("Submission Failed", "Please try again.");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_queue_order_and_expiry() {
        let mut queue = ToastQueue::new();
        assert!(queue.is_empty());

        queue.push(Toast::info("First", "").with_duration(Duration::ZERO));
        queue.push(Toast::success("Second", ""));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().title, "First");

        queue.remove_expired();
        assert_eq!(queue.current().unwrap().title, "Second");

        queue.dismiss();
        assert!(queue.is_empty());
    }
}
