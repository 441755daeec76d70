//! Preferred contact method
//!
//! Chosen on the quote step and kept as local UI state only; it is not part
//! of the form record or the submission.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the user would like to receive the quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Sms,
    Email,
}

impl ContactMethod {
    /// Every method, in display order
    pub const ALL: [ContactMethod; 2] = [ContactMethod::Sms, ContactMethod::Email];

    /// Label shown next to the radio button
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sms => "SMS Text (Instant)",
            Self::Email => "Email (Instant)",
        }
    }

    /// The other method
    pub fn toggled(self) -> Self {
        match self {
            Self::Sms => Self::Email,
            Self::Email => Self::Sms,
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
