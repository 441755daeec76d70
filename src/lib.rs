//! repair-quote - Terminal-based device repair quote wizard
//!
//! A five step wizard: pick a device category, a model, the issues to fix and
//! a location, then leave contact details and see a heuristic price estimate.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Option catalogs, step sequence and the form record
//! - `services`: Pricing and submission exports
//! - `submissions`: Submission events and their sinks
//! - `wizard`: The step wizard controller and its presentation helpers
//! - `cli`: Command handlers
//! - `display`: Table formatting for the CLI
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust
//! use repair_quote::models::{DeviceCategory, FieldUpdate, IssueKind};
//! use repair_quote::wizard::QuoteWizard;
//!
//! let mut wizard = QuoteWizard::default();
//! wizard.update_field(FieldUpdate::Device(Some(DeviceCategory::Computer)));
//! wizard.advance();
//! wizard.update_field(FieldUpdate::Model("mac-mini".into()));
//! wizard.advance();
//! wizard.update_field(FieldUpdate::Issues(vec![IssueKind::DataRecovery].into()));
//! wizard.advance();
//! wizard.update_field(FieldUpdate::Location("Coral Gables".into()));
//! wizard.advance();
//! assert_eq!(wizard.record().quote, 270);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod submissions;
pub mod tui;
pub mod wizard;

pub use error::QuoteError;
