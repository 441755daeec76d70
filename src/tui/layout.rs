//! Layout definitions for the TUI
//!
//! The wizard is one column: progress header, step heading, step body,
//! navigation footer and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the wizard screen
pub struct WizardLayout {
    /// Step markers and fill bar
    pub progress: Rect,
    /// Step title and subtitle
    pub heading: Rect,
    /// Step-specific content
    pub body: Rect,
    /// Back / Continue hints
    pub footer: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl WizardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress (with a blank line)
                Constraint::Length(3), // Heading
                Constraint::Min(6),    // Body
                Constraint::Length(1), // Footer
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            progress: chunks[0],
            heading: chunks[1],
            body: chunks[2],
            footer: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Layout of the quote step: contact form beside the summary
pub struct QuoteLayout {
    pub form: Rect,
    pub summary: Rect,
}

impl QuoteLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        Self {
            form: chunks[0],
            summary: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Horizontally center a column of at most `max_width` inside `r`
pub fn centered_column(max_width: u16, r: Rect) -> Rect {
    let width = max_width.min(r.width);
    let x = r.x + (r.width - width) / 2;
    Rect::new(x, r.y, width, r.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_layout_stacks_regions() {
        let layout = WizardLayout::new(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.progress.y, 0);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.footer.y, 28);
        assert!(layout.body.height >= 6);
    }

    #[test]
    fn test_centered_column() {
        let area = centered_column(60, Rect::new(0, 0, 100, 10));
        assert_eq!(area.x, 20);
        assert_eq!(area.width, 60);

        let narrow = centered_column(60, Rect::new(0, 0, 40, 10));
        assert_eq!(narrow, Rect::new(0, 0, 40, 10));
    }
}
