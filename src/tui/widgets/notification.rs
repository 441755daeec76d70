//! Toast notifications
//!
//! Short-lived messages drawn over the top-right corner of the wizard.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const DEFAULT_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => " i Info ",
            Self::Success => " + Sent ",
            Self::Error => " x Error ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Set when the toast reaches the front of the queue
    shown_at: Option<Instant>,
    ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: None,
            ttl: DEFAULT_TTL,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// A toast that has not been on screen yet never expires
    pub fn is_expired(&self) -> bool {
        self.shown_at
            .is_some_and(|shown_at| shown_at.elapsed() >= self.ttl)
    }
}

impl Widget for &Notification {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.kind.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Pending toasts, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
        self.start_front_timer();
    }

    /// Drop the current toast once its time is up; called on each tick
    ///
    /// At most one toast goes per call, so the next one is on screen for at
    /// least a tick before its own timer can run out.
    pub fn remove_expired(&mut self) {
        if self.current().is_some_and(Notification::is_expired) {
            self.notifications.pop_front();
            self.start_front_timer();
        }
    }

    fn start_front_timer(&mut self) {
        if let Some(front) = self.notifications.front_mut() {
            front.shown_at.get_or_insert_with(Instant::now);
        }
    }

    /// The toast currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

/// Area for a toast in the top-right corner of `frame`
pub fn toast_area(frame: Rect) -> Rect {
    let width = 42.min(frame.width);
    let height = 4.min(frame.height);
    Rect::new(
        frame.x + frame.width.saturating_sub(width + 1),
        frame.y + 1.min(frame.height.saturating_sub(height)),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");
    }

    #[test]
    fn test_expired_toasts_are_removed() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::error("gone").with_ttl(Duration::ZERO));
        queue.push(Notification::info("stays"));

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().kind, NotificationKind::Info);
    }

    #[test]
    fn test_queued_toast_waits_for_its_turn() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::success("Sent").with_ttl(Duration::ZERO));
        queue.push(Notification::error("Not recorded").with_ttl(Duration::ZERO));

        // Only the front toast's timer has started
        assert!(queue.current().unwrap().is_expired());
        assert!(!queue.notifications[1].is_expired());

        queue.remove_expired();
        let current = queue.current().unwrap();
        assert_eq!(current.kind, NotificationKind::Error);
        assert_eq!(current.message, "Not recorded");

        queue.remove_expired();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_follow_up_toast_outlives_the_first() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::success("Sent").with_ttl(Duration::ZERO));
        queue.push(Notification::error("Not recorded"));

        for _ in 0..5 {
            queue.remove_expired();
        }
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn test_toast_area_fits_small_frames() {
        let area = toast_area(Rect::new(0, 0, 20, 3));
        assert!(area.width <= 20);
        assert!(area.height <= 3);
    }
}
