//! Contact/quote step
//!
//! The last step collects contact details and shows a read-only summary of
//! the selections and the computed quote. The preferred contact method lives
//! here as local UI state; it is never written into the form record.

use crate::models::{ContactMethod, FieldUpdate, FormRecord};

/// Typical turnaround shown beside every quote
pub const TURNAROUND_NOTE: &str = "Most computer repairs can be completed in 48 hours, \
    but some may take longer depending on the part required and the diagnostic done.";

/// The store a quote request is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Store {
    pub name: &'static str,
    pub initials: &'static str,
    pub address: [&'static str; 3],
    pub phone: &'static str,
}

/// The store shown on the quote summary
pub const SELECTED_STORE: Store = Store {
    name: "Computer Village",
    initials: "CV",
    address: ["1140 South Dixie", "Highway, Coral", "Gables, FL USA"],
    phone: "305-667-7400",
};

/// Focusable controls on the contact form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    Method,
    #[default]
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Method => Self::Name,
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Message,
            Self::Message => Self::Method,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Method => Self::Message,
            Self::Name => Self::Method,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
            Self::Message => Self::Phone,
        }
    }

    /// Record update carrying `value` for this control; the method has none
    pub fn field_update(self, value: String) -> Option<FieldUpdate> {
        match self {
            Self::Method => None,
            Self::Name => Some(FieldUpdate::Name(value)),
            Self::Email => Some(FieldUpdate::Email(value)),
            Self::Phone => Some(FieldUpdate::Phone(value)),
            Self::Message => Some(FieldUpdate::Message(value)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Method => "Contact Method",
            Self::Name => "Name*",
            Self::Email => "Email*",
            Self::Phone => "Phone Number*",
            Self::Message => "Message (Optional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Method => "",
            Self::Name => "Enter your name",
            Self::Email => "Enter your email",
            Self::Phone => "98234 56789",
            Self::Message => "Enter your message",
        }
    }
}

/// Local state of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactStep {
    pub method: ContactMethod,
    pub focused: ContactField,
}

impl ContactStep {
    pub fn new(method: ContactMethod) -> Self {
        Self {
            method,
            focused: ContactField::default(),
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn toggle_method(&mut self) {
        self.method = self.method.toggled();
    }
}

/// Read-only summary of a record for the quote step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSummary {
    pub device: String,
    pub model: String,
    pub problem: String,
    pub quote: u32,
}

impl QuoteSummary {
    pub fn from_record(record: &FormRecord) -> Self {
        Self {
            device: record.device_label().to_string(),
            model: record.model_label().to_string(),
            problem: record.issues.joined_names(),
            quote: record.quote,
        }
    }

    /// Label/value rows for the summary panel
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Device", self.device.clone()),
            ("Model", self.model.clone()),
            ("Problem", self.problem.clone()),
            ("Timeframe", "-".to_string()),
            ("Warranty", "-".to_string()),
        ]
    }
}
