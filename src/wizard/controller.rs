//! Step wizard controller
//!
//! States are the five steps; `advance` moves forward one step when the
//! current step is complete, `retreat` moves back one step, and the last
//! step is left only through `submit`. Transitions that are not allowed are
//! ignored rather than reported.

use tracing::{debug, info, warn};

use crate::config::{DependentFieldPolicy, Settings};
use crate::models::{FieldUpdate, FormRecord, Step};
use crate::services::Pricing;
use crate::submissions::{Submission, SubmissionSink};

/// One user's quote session
#[derive(Debug, Clone)]
pub struct QuoteWizard {
    step: Step,
    record: FormRecord,
    pricing: Pricing,
    dependent_fields: DependentFieldPolicy,
}

impl Default for QuoteWizard {
    fn default() -> Self {
        Self::new(Pricing::default(), DependentFieldPolicy::default())
    }
}

impl QuoteWizard {
    /// Start a session on the first step with an empty record
    pub fn new(pricing: Pricing, dependent_fields: DependentFieldPolicy) -> Self {
        Self {
            step: Step::FIRST,
            record: FormRecord::default(),
            pricing,
            dependent_fields,
        }
    }

    /// Start a session configured from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Pricing::from_settings(settings), settings.dependent_fields)
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// 1-based position of the current step
    pub fn position(&self) -> usize {
        self.step.position()
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Replace one field of the record
    ///
    /// Values are not validated here; the gating predicates decide whether
    /// the wizard may move on. Choosing a different device clears the model
    /// under [`DependentFieldPolicy::Clear`].
    pub fn update_field(&mut self, update: FieldUpdate) {
        let field = update.field();

        if let FieldUpdate::Device(device) = &update {
            let changed = *device != self.record.device;
            if changed
                && self.dependent_fields == DependentFieldPolicy::Clear
                && !self.record.model.is_empty()
            {
                debug!(model = %self.record.model, "clearing model after device change");
                self.record.model.clear();
            }
        }

        self.record.apply(update);
        debug!(%field, step = %self.step, "field updated");
    }

    /// Whether the given step's requirements are met by the record
    pub fn is_step_complete(&self, step: Step) -> bool {
        let record = &self.record;
        match step {
            Step::Device => record.device.is_some(),
            Step::Model => !record.model.is_empty(),
            Step::Issue => !record.issues.is_empty(),
            Step::Location => !record.location.is_empty(),
            Step::Quote => record.has_contact_details(),
        }
    }

    /// Whether the current step's requirements are met
    ///
    /// On the last step this is the submission gate.
    pub fn can_advance(&self) -> bool {
        self.is_step_complete(self.step)
    }

    /// Whether `submit` would emit a submission
    pub fn can_submit(&self) -> bool {
        self.step.is_terminal() && self.can_advance()
    }

    /// Move to the next step; returns false if nothing changed
    ///
    /// Leaving the location step prices the selection first so the quote
    /// step shows it.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            debug!(step = %self.step, "advance ignored on last step");
            return false;
        };

        if !self.can_advance() {
            debug!(step = %self.step, "advance ignored: step incomplete");
            return false;
        }

        if self.step == Step::Location {
            self.record.quote = self.pricing.quote_record(&self.record);
            info!(
                device = self.record.device.map(|d| d.id()).unwrap_or_default(),
                issues = self.record.issues.len(),
                quote = self.record.quote,
                "quote computed"
            );
        }

        debug!(from = %self.step, to = %next, "advance");
        self.step = next;
        true
    }

    /// Move to the previous step; returns false on the first step
    ///
    /// No field is cleared.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                debug!(from = %self.step, to = %prev, "retreat");
                self.step = prev;
                true
            }
            None => {
                debug!("retreat ignored on first step");
                false
            }
        }
    }

    /// Emit a submission of the current record
    ///
    /// Only effective on the last step with name, email and phone present.
    /// Neither the step nor the record changes. A sink failure is logged and
    /// otherwise ignored; the submission is still returned.
    pub fn submit(&self, sink: &mut dyn SubmissionSink) -> Option<Submission> {
        if !self.can_submit() {
            debug!(step = %self.step, "submit ignored: gate closed");
            return None;
        }

        let submission = Submission::new(self.record.clone());
        info!(
            id = %submission.id,
            device = self.record.device.map(|d| d.id()).unwrap_or_default(),
            model = %self.record.model,
            quote = self.record.quote,
            "quote request submitted"
        );

        if let Err(e) = sink.deliver(&submission) {
            warn!(id = %submission.id, error = %e, "failed to deliver submission");
        }

        Some(submission)
    }

    /// Discard the session and start over on the first step
    pub fn reset(&mut self) {
        self.step = Step::FIRST;
        self.record = FormRecord::default();
    }
}
