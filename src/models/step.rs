//! The ordered wizard step sequence

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the quote wizard, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Device = 1,
    Model = 2,
    Issue = 3,
    Location = 4,
    Quote = 5,
}

impl Step {
    /// Every step, in order
    pub const ALL: [Step; 5] = [
        Step::Device,
        Step::Model,
        Step::Issue,
        Step::Location,
        Step::Quote,
    ];

    /// The first step a new session starts on
    pub const FIRST: Step = Step::Device;

    /// The terminal step, left only by submission
    pub const LAST: Step = Step::Quote;

    /// 1-based position in the sequence
    pub fn position(self) -> usize {
        self as usize
    }

    /// Step at a 1-based position
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position.checked_sub(1)?).copied()
    }

    /// The following step, if any
    pub fn next(self) -> Option<Self> {
        Self::from_position(self.position() + 1)
    }

    /// The preceding step, if any
    pub fn prev(self) -> Option<Self> {
        Self::from_position(self.position() - 1)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::LAST
    }

    /// Short label for the progress display
    pub fn label(self) -> &'static str {
        match self {
            Self::Device => "Device",
            Self::Model => "Model",
            Self::Issue => "Issue",
            Self::Location => "Location",
            Self::Quote => "Quote",
        }
    }

    /// Heading shown above the step body
    pub fn title(self) -> &'static str {
        match self {
            Self::Device => "Get Instant Price Quote",
            Self::Model => "Device Model",
            Self::Issue => "What's the Issue?",
            Self::Location => "Your Location",
            Self::Quote => "Let us know where to send your instant quote!",
        }
    }

    /// Instruction shown under the heading
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Device => "Select your device",
            Self::Model => "Select your model",
            Self::Issue => "Select one or more repairs and then press \"Continue\"",
            Self::Location => "Enter your city or area",
            Self::Quote => "Enter your contact details to get the quote",
        }
    }

    /// Labels of every step, in order
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.label()).collect()
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_one_based() {
        assert_eq!(Step::Device.position(), 1);
        assert_eq!(Step::Quote.position(), 5);
        assert_eq!(Step::from_position(3), Some(Step::Issue));
        assert_eq!(Step::from_position(0), None);
        assert_eq!(Step::from_position(6), None);
    }

    #[test]
    fn test_next_and_prev_stop_at_ends() {
        assert_eq!(Step::Device.prev(), None);
        assert_eq!(Step::Quote.next(), None);
        assert_eq!(Step::Location.next(), Some(Step::Quote));
        assert_eq!(Step::Model.prev(), Some(Step::Device));
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Step::labels(),
            vec!["Device", "Model", "Issue", "Location", "Quote"]
        );
    }
}
