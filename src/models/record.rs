//! The form record accumulated by the wizard

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::{self, ModelEntry};
use super::device::DeviceCategory;
use super::issue::IssueSet;

/// Everything the user has entered so far, plus the computed quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Selected device category
    pub device: Option<DeviceCategory>,

    /// Selected model id (empty until chosen)
    #[serde(default)]
    pub model: String,

    /// Selected issues, in the order they were picked
    #[serde(default)]
    pub issues: IssueSet,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    /// Optional free-form message
    #[serde(default)]
    pub message: String,

    /// Price estimate in whole currency units, set when leaving the location step
    #[serde(default)]
    pub quote: u32,
}

/// Names of the user-editable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Device,
    Model,
    Issues,
    Location,
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Model => "model",
            Self::Issues => "issues",
            Self::Location => "location",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A replacement value for exactly one field of the record
///
/// `quote` has no variant: it is only ever written by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Device(Option<DeviceCategory>),
    Model(String),
    Issues(IssueSet),
    Location(String),
    Name(String),
    Email(String),
    Phone(String),
    Message(String),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> Field {
        match self {
            Self::Device(_) => Field::Device,
            Self::Model(_) => Field::Model,
            Self::Issues(_) => Field::Issues,
            Self::Location(_) => Field::Location,
            Self::Name(_) => Field::Name,
            Self::Email(_) => Field::Email,
            Self::Phone(_) => Field::Phone,
            Self::Message(_) => Field::Message,
        }
    }
}

impl FormRecord {
    /// Replace exactly one field
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Device(device) => self.device = device,
            FieldUpdate::Model(model) => self.model = model,
            FieldUpdate::Issues(issues) => self.issues = issues,
            FieldUpdate::Location(location) => self.location = location,
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Email(email) => self.email = email,
            FieldUpdate::Phone(phone) => self.phone = phone,
            FieldUpdate::Message(message) => self.message = message,
        }
    }

    /// Catalog entry for the selected model, if it belongs to the selected device
    pub fn model_entry(&self) -> Option<&'static ModelEntry> {
        catalog::find_model(self.device?, &self.model)
    }

    /// Device display name, or an empty string
    pub fn device_label(&self) -> &'static str {
        self.device.map(|d| d.display_name()).unwrap_or_default()
    }

    /// Model display name; falls back to the raw id for stale models
    pub fn model_label(&self) -> &str {
        self.model_entry()
            .map(|m| m.display_name)
            .unwrap_or(self.model.as_str())
    }

    /// Whether name, email and phone are all present
    pub fn has_contact_details(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueKind;

    fn filled_record() -> FormRecord {
        FormRecord {
            device: Some(DeviceCategory::Tablet),
            model: "ipad-air".into(),
            issues: vec![IssueKind::Battery, IssueKind::Overheats].into(),
            location: "Coral Gables".into(),
            name: "Sam".into(),
            email: "sam@example.com".into(),
            phone: "98234 56789".into(),
            message: "Cracked corner too".into(),
            quote: 168,
        }
    }

    #[test]
    fn test_apply_replaces_only_target_field() {
        let original = filled_record();
        let mut record = original.clone();
        record.apply(FieldUpdate::Location("Miami".into()));

        assert_eq!(record.location, "Miami");
        let mut expected = original;
        expected.location = "Miami".into();
        assert_eq!(record, expected);
    }

    #[test]
    fn test_serde_round_trip() {
        let record = filled_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: FormRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
        assert_eq!(back.issues.len(), 2);
    }

    #[test]
    fn test_empty_record_round_trip() {
        let record = FormRecord::default();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"device\":null"));
        let back: FormRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_labels() {
        let mut record = filled_record();
        assert_eq!(record.device_label(), "Tablet");
        assert_eq!(record.model_label(), "iPad Air");

        record.device = Some(DeviceCategory::Watch);
        assert!(record.model_entry().is_none());
        assert_eq!(record.model_label(), "ipad-air");
    }

    #[test]
    fn test_contact_details() {
        let mut record = filled_record();
        assert!(record.has_contact_details());
        record.phone.clear();
        assert!(!record.has_contact_details());
    }
}
