//! Export of recorded submissions
//!
//! CSV for spreadsheets (one row per submission, issue ids joined with `;`),
//! JSON and YAML for the full snapshots with an export header.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, QuoteResult};
use crate::submissions::Submission;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Wrapper written by the JSON and YAML exports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub submission_count: usize,
    pub submissions: Vec<Submission>,
}

impl SubmissionExport {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            submission_count: submissions.len(),
            submissions,
        }
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: String,
    submitted_at: String,
    device: &'a str,
    model: &'a str,
    issues: String,
    location: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
    quote: u32,
}

impl<'a> CsvRow<'a> {
    fn from_submission(submission: &'a Submission) -> Self {
        let record = &submission.record;
        Self {
            id: submission.id.as_uuid().to_string(),
            submitted_at: submission.submitted_at.to_rfc3339(),
            device: record.device.map(|d| d.id()).unwrap_or(""),
            model: &record.model,
            issues: record
                .issues
                .iter()
                .map(|i| i.id())
                .collect::<Vec<_>>()
                .join(";"),
            location: &record.location,
            name: &record.name,
            email: &record.email,
            phone: &record.phone,
            message: &record.message,
            quote: record.quote,
        }
    }
}

fn export_err(e: impl std::fmt::Display) -> QuoteError {
    QuoteError::Export(e.to_string())
}

/// Export submissions to CSV
pub fn export_submissions_csv<W: Write>(submissions: &[Submission], writer: W) -> QuoteResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if submissions.is_empty() {
        csv_writer
            .write_record([
                "id",
                "submitted_at",
                "device",
                "model",
                "issues",
                "location",
                "name",
                "email",
                "phone",
                "message",
                "quote",
            ])
            .map_err(export_err)?;
    }

    for submission in submissions {
        csv_writer
            .serialize(CsvRow::from_submission(submission))
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(export_err)?;
    Ok(())
}

/// Export submissions to JSON
pub fn export_submissions_json<W: Write>(
    submissions: &[Submission],
    writer: &mut W,
    pretty: bool,
) -> QuoteResult<()> {
    let export = SubmissionExport::new(submissions.to_vec());

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export).map_err(export_err)?;
    } else {
        serde_json::to_writer(&mut *writer, &export).map_err(export_err)?;
    }
    writeln!(writer).map_err(export_err)?;

    Ok(())
}

/// Export submissions to YAML
pub fn export_submissions_yaml<W: Write>(
    submissions: &[Submission],
    writer: &mut W,
) -> QuoteResult<()> {
    let export = SubmissionExport::new(submissions.to_vec());

    writeln!(writer, "# repair-quote submission export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}
