//! The step wizard
//!
//! `QuoteWizard` is the controller: it owns the step pointer and the form
//! record, gates transitions, prices the selection and emits submissions.
//! The other modules are the pure contracts the presentation layer renders
//! through:
//!
//! - `progress`: step markers and fill fraction for a position
//! - `selection`: single- and multi-select widget contracts
//! - `contact`: the terminal contact/quote step

pub mod contact;
pub mod controller;
pub mod progress;
pub mod selection;

pub use contact::{ContactField, ContactStep, QuoteSummary};
pub use controller::QuoteWizard;
pub use progress::{Progress, StepMarker, StepState};
pub use selection::{MultiSelect, SelectionEvent, SingleSelect};
