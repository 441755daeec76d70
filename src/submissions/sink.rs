//! Submission sinks

use crate::error::QuoteResult;

use super::entry::Submission;

/// Receives accepted submissions
pub trait SubmissionSink {
    /// Hand over one submission
    fn deliver(&mut self, submission: &Submission) -> QuoteResult<()>;
}

/// An absent sink drops submissions
impl<S: SubmissionSink> SubmissionSink for Option<S> {
    fn deliver(&mut self, submission: &Submission) -> QuoteResult<()> {
        match self {
            Some(sink) => sink.deliver(submission),
            None => Ok(()),
        }
    }
}

/// Keeps every delivered submission in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Vec<Submission>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions received so far, oldest first
    pub fn delivered(&self) -> &[Submission] {
        &self.delivered
    }

    pub fn len(&self) -> usize {
        self.delivered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty()
    }
}

impl SubmissionSink for MemorySink {
    fn deliver(&mut self, submission: &Submission) -> QuoteResult<()> {
        self.delivered.push(submission.clone());
        Ok(())
    }
}
