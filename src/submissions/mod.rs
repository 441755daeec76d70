//! Submission events and where they go
//!
//! When the wizard accepts a submission it hands a [`Submission`] snapshot to
//! a [`SubmissionSink`]. Delivery is fire-and-forget: the controller logs a
//! failed delivery and moves on.
//!
//! - `Submission`: the snapshot with an id and timestamp
//! - `SubmissionLog`: append-only JSONL file sink
//! - `MemorySink`: keeps submissions in memory (embedding and tests)

mod entry;
mod log;
mod sink;

pub use entry::{Submission, SubmissionId};
pub use log::SubmissionLog;
pub use sink::{MemorySink, SubmissionSink};
