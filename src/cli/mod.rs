//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the catalogs, pricing and the
//! submission log.

pub mod catalog;
pub mod estimate;
pub mod submissions;

pub use catalog::{handle_catalog_command, CatalogKind};
pub use estimate::{handle_estimate_command, EstimateArgs};
pub use submissions::{handle_submissions_command, ExportFormat, SubmissionsCommands};
