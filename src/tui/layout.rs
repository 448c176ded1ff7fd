//! Layout definitions for the TUI
//!
//! One centered card: header, progress bar, step body, navigation row and
//! key hints.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the wizard card grows
const MAX_CARD_WIDTH: u16 = 100;

/// Layout regions for the wizard screen
pub struct WizardLayout {
    /// Outer card border
    pub card: Rect,
    /// "Step k: Title" and "k of N"
    pub header: Rect,
    pub progress: Rect,
    /// The current step's fields
    pub body: Rect,
    /// Back / Next / Submit
    pub nav: Rect,
    /// Key hints and status message
    pub status_bar: Rect,
}

impl WizardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let width = area.width.min(MAX_CARD_WIDTH);
        let card = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Card
                Constraint::Length(1), // Status bar
            ])
            .split(card);

        let inner = Rect {
            x: vertical[0].x + 2,
            y: vertical[0].y + 1,
            width: vertical[0].width.saturating_sub(4),
            height: vertical[0].height.saturating_sub(2),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Nav
            ])
            .split(inner);

        Self {
            card: vertical[0],
            header: chunks[0],
            progress: chunks[1],
            body: chunks[3],
            nav: chunks[4],
            status_bar: vertical[1],
        }
    }
}

/// Area for a toast in the top-right corner
pub fn toast_area(area: Rect) -> Rect {
    let width = 44.min(area.width);
    let height = 4.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_area() {
        let area = Rect::new(0, 0, 160, 40);
        let layout = WizardLayout::new(area);
        assert_eq!(layout.card.width, MAX_CARD_WIDTH);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert!(layout.body.height >= 3);
        assert!(layout.nav.y > layout.body.y);
    }

    #[test]
    fn test_toast_area_top_right() {
        let area = Rect::new(0, 0, 80, 24);
        let toast = toast_area(area);
        assert_eq!(toast.x + toast.width, 80);
        assert_eq!(toast.y, 0);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(50, 7, Rect::new(0, 0, 30, 5));
        assert_eq!(r.width, 30);
        assert_eq!(r.height, 5);
    }
}
