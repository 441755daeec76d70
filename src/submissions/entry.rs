//! Submission event data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::FormRecord;

/// Identifier of one accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", &self.0.to_string()[..8])
    }
}

/// A snapshot of the form record at the moment it was submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,

    /// When the submission was accepted (UTC)
    pub submitted_at: DateTime<Utc>,

    pub record: FormRecord,
}

impl Submission {
    /// Wrap a record snapshot with a fresh id and the current time
    pub fn new(record: FormRecord) -> Self {
        Self {
            id: SubmissionId::new(),
            submitted_at: Utc::now(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceCategory, IssueKind};

    #[test]
    fn test_display_prefix() {
        let id = SubmissionId::new();
        let shown = id.to_string();
        assert!(shown.starts_with("sub-"));
        assert_eq!(shown.len(), 12);
    }

    #[test]
    fn test_json_round_trip() {
        let record = FormRecord {
            device: Some(DeviceCategory::Computer),
            model: "imac".into(),
            issues: vec![IssueKind::DataRecovery].into(),
            quote: 270,
            ..Default::default()
        };
        let submission = Submission::new(record);

        let json = serde_json::to_string(&submission).unwrap();
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, submission);
    }
}
