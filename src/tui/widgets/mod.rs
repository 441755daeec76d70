//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;
pub mod notification;
pub mod progress;
pub mod selection;

// Re-export commonly used widgets
pub use input::TextInput;
pub use notification::{Notification, NotificationKind, NotificationQueue};
pub use progress::ProgressHeader;
pub use selection::{Card, CardGrid};
