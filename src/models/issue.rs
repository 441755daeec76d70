//! Repair issue tags and the ordered issue set

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;

/// A problem the user can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Battery,
    DataRecovery,
    Diagnostic,
    DoesNotBoot,
    HardDrive,
    Overheats,
}

impl IssueKind {
    /// Every issue, in display order
    pub const ALL: [IssueKind; 6] = [
        IssueKind::Battery,
        IssueKind::DataRecovery,
        IssueKind::Diagnostic,
        IssueKind::DoesNotBoot,
        IssueKind::HardDrive,
        IssueKind::Overheats,
    ];

    /// Stable identifier used on the command line and in logs
    pub fn id(&self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::DataRecovery => "data-recovery",
            Self::Diagnostic => "diagnostic",
            Self::DoesNotBoot => "does-not-boot",
            Self::HardDrive => "hard-drive",
            Self::Overheats => "overheats",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Battery => "Battery",
            Self::DataRecovery => "Data Recovery",
            Self::Diagnostic => "Diagnostic",
            Self::DoesNotBoot => "Does Not Boot",
            Self::HardDrive => "Hard Drive",
            Self::Overheats => "Overheats",
        }
    }

    /// Parse an issue id, returning `None` for unknown ids
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.id().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for IssueKind {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| QuoteError::issue_not_found(s))
    }
}

/// The issues a user selected
///
/// Insertion order is preserved and an issue appears at most once. The
/// serialized form is a plain list; duplicates in the input collapse onto
/// their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<IssueKind>", into = "Vec<IssueKind>")]
pub struct IssueSet(Vec<IssueKind>);

impl IssueSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue; returns false if it was already present
    pub fn insert(&mut self, issue: IssueKind) -> bool {
        if self.contains(issue) {
            return false;
        }
        self.0.push(issue);
        true
    }

    /// Remove an issue; returns false if it was not present
    pub fn remove(&mut self, issue: IssueKind) -> bool {
        let before = self.0.len();
        self.0.retain(|&i| i != issue);
        self.0.len() != before
    }

    /// Return a new set with `issue` added if absent or removed if present
    pub fn toggled(&self, issue: IssueKind) -> Self {
        let mut next = self.clone();
        if !next.remove(issue) {
            next.0.push(issue);
        }
        next
    }

    pub fn contains(&self, issue: IssueKind) -> bool {
        self.0.contains(&issue)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = IssueKind> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[IssueKind] {
        &self.0
    }

    /// Display names joined with ", "
    pub fn joined_names(&self) -> String {
        self.0
            .iter()
            .map(|i| i.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Vec<IssueKind>> for IssueSet {
    fn from(issues: Vec<IssueKind>) -> Self {
        issues.into_iter().collect()
    }
}

impl From<IssueSet> for Vec<IssueKind> {
    fn from(set: IssueSet) -> Self {
        set.0
    }
}

impl FromIterator<IssueKind> for IssueSet {
    fn from_iter<T: IntoIterator<Item = IssueKind>>(iter: T) -> Self {
        let mut set = IssueSet::new();
        for issue in iter {
            set.insert(issue);
        }
        set
    }
}
