//! Core data models for the quote wizard
//!
//! This module contains the option catalogs, the typed device and issue tags
//! they are keyed by, the wizard step sequence and the form record the
//! controller owns.

pub mod catalog;
pub mod contact;
pub mod device;
pub mod issue;
pub mod record;
pub mod step;

pub use catalog::{CatalogEntry, ModelEntry};
pub use contact::ContactMethod;
pub use device::DeviceCategory;
pub use issue::{IssueKind, IssueSet};
pub use record::{Field, FieldUpdate, FormRecord};
pub use step::Step;
