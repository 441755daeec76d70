//! Submissions CLI commands
//!
//! Lists and exports the quote requests recorded by the wizard.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{QuotePaths, Settings};
use crate::display::format_submission_list;
use crate::error::{QuoteError, QuoteResult};
use crate::services::export;
use crate::submissions::{Submission, SubmissionLog};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per submission
    Csv,
    /// JSON with an export header
    Json,
    /// YAML with an export header
    Yaml,
}

/// Submissions subcommands
#[derive(Subcommand, Debug)]
pub enum SubmissionsCommands {
    /// List recorded submissions
    List {
        /// Show only the most recent N submissions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export recorded submissions to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
}

/// Handle submissions commands
pub fn handle_submissions_command(
    paths: &QuotePaths,
    settings: &Settings,
    cmd: SubmissionsCommands,
) -> QuoteResult<()> {
    let log = SubmissionLog::new(paths.submissions_log());

    match cmd {
        SubmissionsCommands::List { limit } => {
            let submissions = match limit {
                Some(count) => log.read_recent(count)?,
                None => log.read_all()?,
            };
            println!("{}", format_submission_list(settings, &submissions));
        }
        SubmissionsCommands::Export { output, format } => {
            let submissions = log.read_all()?;
            export_to_file(&submissions, &output, format)?;
            info!(path = %output.display(), count = submissions.len(), "submissions exported");
            println!(
                "Exported {} submission(s) to {}",
                submissions.len(),
                output.display()
            );
        }
    }

    Ok(())
}

fn export_to_file(submissions: &[Submission], output: &Path, format: ExportFormat) -> QuoteResult<()> {
    let file = File::create(output).map_err(|e| {
        QuoteError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export::export_submissions_csv(submissions, &mut writer)?,
        ExportFormat::Json => export::export_submissions_json(submissions, &mut writer, true)?,
        ExportFormat::Yaml => export::export_submissions_yaml(submissions, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| QuoteError::Export(e.to_string()))
}
