//! Display formatting for terminal output
//!
//! Formats catalogs, price breakdowns and recorded submissions as tables
//! for the CLI.

pub mod catalog;
pub mod quote;
pub mod submission;

pub use catalog::{format_device_catalog, format_issue_catalog, format_model_catalog};
pub use quote::format_breakdown;
pub use submission::format_submission_list;
