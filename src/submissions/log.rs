//! Append-only submission log
//!
//! Each accepted submission is written as a single JSON line and flushed
//! immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{QuoteError, QuoteResult};

use super::entry::Submission;
use super::sink::SubmissionSink;

/// Writes submissions to a line-delimited JSON (JSONL) file
#[derive(Debug, Clone)]
pub struct SubmissionLog {
    log_path: PathBuf,
}

impl SubmissionLog {
    /// Create a log that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one submission
    pub fn append(&self, submission: &Submission) -> QuoteResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| QuoteError::Io(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| QuoteError::Io(format!("Failed to open submission log: {}", e)))?;

        let json = serde_json::to_string(submission)
            .map_err(|e| QuoteError::Json(format!("Failed to serialize submission: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| QuoteError::Io(format!("Failed to write submission: {}", e)))?;

        file.flush()
            .map_err(|e| QuoteError::Io(format!("Failed to flush submission log: {}", e)))?;

        Ok(())
    }

    /// Read all submissions, oldest first
    pub fn read_all(&self) -> QuoteResult<Vec<Submission>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| QuoteError::Io(format!("Failed to open submission log: {}", e)))?;

        let mut submissions = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                QuoteError::Io(format!(
                    "Failed to read submission log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let submission: Submission =
                serde_json::from_str(&line).map_err(|e| QuoteError::CorruptLog {
                    line: line_num + 1,
                    reason: e.to_string(),
                })?;
            submissions.push(submission);
        }

        Ok(submissions)
    }

    /// Read the most recent N submissions
    pub fn read_recent(&self, count: usize) -> QuoteResult<Vec<Submission>> {
        let mut all = self.read_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all.split_off(start))
    }

    /// Number of submissions in the log
    pub fn entry_count(&self) -> QuoteResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

impl SubmissionSink for SubmissionLog {
    fn deliver(&mut self, submission: &Submission) -> QuoteResult<()> {
        self.append(submission)
    }
}
