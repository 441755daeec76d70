//! Application state for the TUI
//!
//! The App struct holds the wizard controller plus everything the screen
//! needs that is not part of the form record: highlight cursors, text
//! buffers, the contact form focus and pending toasts.

use tracing::info;

use crate::config::{QuotePaths, Settings};
use crate::models::catalog::{self, DEVICES, ISSUES};
use crate::models::{DeviceCategory, FieldUpdate, Step};
use crate::error::QuoteResult;
use crate::submissions::{Submission, SubmissionLog, SubmissionSink};
use crate::wizard::{ContactField, ContactStep, MultiSelect, QuoteWizard, SingleSelect};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Forwards to a sink and remembers whether delivery failed
struct TrackedSink<'s, S> {
    inner: &'s mut S,
    failure: Option<String>,
}

impl<S: SubmissionSink> SubmissionSink for TrackedSink<'_, S> {
    fn deliver(&mut self, submission: &Submission) -> QuoteResult<()> {
        let result = self.inner.deliver(submission);
        if let Err(e) = &result {
            self.failure = Some(e.to_string());
        }
        result
    }
}

/// Main application state
pub struct App<'a> {
    pub settings: &'a Settings,

    /// The step wizard controller
    pub wizard: QuoteWizard,

    /// Where accepted submissions are appended (disabled in settings: None)
    pub submission_log: Option<SubmissionLog>,

    pub should_quit: bool,
    pub active_dialog: ActiveDialog,

    /// Highlighted card on the device step
    pub device_cursor: usize,
    /// Highlighted card on the model step
    pub model_cursor: usize,
    /// Highlighted card on the issue step
    pub issue_cursor: usize,

    pub location_input: TextInput,
    pub name_input: TextInput,
    pub email_input: TextInput,
    pub phone_input: TextInput,
    pub message_input: TextInput,

    /// Contact method and focused field on the quote step
    pub contact: ContactStep,

    pub notifications: NotificationQueue,

    /// Status message to display
    pub status_message: Option<String>,

    /// The last accepted submission in this session
    pub last_submission: Option<Submission>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, paths: &'a QuotePaths) -> Self {
        let submission_log = settings
            .record_submissions
            .then(|| SubmissionLog::new(paths.submissions_log()));

        Self {
            settings,
            wizard: QuoteWizard::from_settings(settings),
            submission_log,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            device_cursor: 0,
            model_cursor: 0,
            issue_cursor: 0,
            location_input: TextInput::new().placeholder("e.g. Coral Gables, FL"),
            name_input: TextInput::new().placeholder(ContactField::Name.placeholder()),
            email_input: TextInput::new().placeholder(ContactField::Email.placeholder()),
            phone_input: TextInput::new().placeholder(ContactField::Phone.placeholder()),
            message_input: TextInput::new().placeholder(ContactField::Message.placeholder()),
            contact: ContactStep::new(settings.default_contact_method),
            notifications: NotificationQueue::new(),
            status_message: None,
            last_submission: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_help(&mut self) {
        self.active_dialog = ActiveDialog::Help;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn step(&self) -> Step {
        self.wizard.step()
    }

    /// Whether keystrokes currently go into a text field
    pub fn is_editing_text(&self) -> bool {
        match self.step() {
            Step::Location => true,
            Step::Quote => self.contact.focused != ContactField::Method,
            _ => false,
        }
    }

    /// Single-select contract for the device step
    pub fn device_select(&self) -> SingleSelect<'static, DeviceCategory> {
        SingleSelect::new(&DEVICES, self.wizard.record().device)
    }

    /// Single-select contract for the model step; empty without a device
    pub fn model_select(&self) -> SingleSelect<'static, &'static str> {
        let record = self.wizard.record();
        let entries = record.device.map(catalog::models_for).unwrap_or(&[]);
        let selected = record.model_entry().map(|entry| entry.id);
        SingleSelect::new(entries, selected)
    }

    /// Multi-select contract for the issue step
    pub fn issue_select(&self) -> MultiSelect<'_> {
        MultiSelect::new(&ISSUES, &self.wizard.record().issues)
    }

    /// The text buffer behind a contact field
    pub fn contact_input(&self, field: ContactField) -> Option<&TextInput> {
        match field {
            ContactField::Method => None,
            ContactField::Name => Some(&self.name_input),
            ContactField::Email => Some(&self.email_input),
            ContactField::Phone => Some(&self.phone_input),
            ContactField::Message => Some(&self.message_input),
        }
    }

    /// The text field that receives keystrokes, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.step() {
            Step::Location => Some(&mut self.location_input),
            Step::Quote => match self.contact.focused {
                ContactField::Method => None,
                ContactField::Name => Some(&mut self.name_input),
                ContactField::Email => Some(&mut self.email_input),
                ContactField::Phone => Some(&mut self.phone_input),
                ContactField::Message => Some(&mut self.message_input),
            },
            _ => None,
        }
    }

    /// Push the focused text field's content into the record
    pub fn commit_focused_input(&mut self) {
        let update = match self.step() {
            Step::Location => FieldUpdate::Location(self.location_input.value().to_string()),
            Step::Quote => {
                let focused = self.contact.focused;
                let update = self
                    .contact_input(focused)
                    .and_then(|input| focused.field_update(input.value().to_string()));
                match update {
                    Some(update) => update,
                    None => return,
                }
            }
            _ => return,
        };
        self.wizard.update_field(update);
    }

    /// Mark which text field has focus after a step or field change
    pub fn sync_focus(&mut self) {
        let step = self.step();
        let focused = self.contact.focused;
        self.location_input.focused = step == Step::Location;
        self.name_input.focused = step == Step::Quote && focused == ContactField::Name;
        self.email_input.focused = step == Step::Quote && focused == ContactField::Email;
        self.phone_input.focused = step == Step::Quote && focused == ContactField::Phone;
        self.message_input.focused = step == Step::Quote && focused == ContactField::Message;
    }

    /// Point the cursors at the current selection after a step change
    pub fn sync_cursors(&mut self) {
        if let Some(index) = self.device_select().selected_index() {
            self.device_cursor = index;
        }
        let model_select = self.model_select();
        let model_count = model_select.entries().len();
        self.model_cursor = match model_select.selected_index() {
            Some(index) => index,
            None if self.model_cursor < model_count => self.model_cursor,
            None => 0,
        };
    }

    /// Called after any step change
    pub fn on_step_changed(&mut self) {
        self.clear_status();
        self.sync_cursors();
        self.sync_focus();
    }

    pub fn advance(&mut self) -> bool {
        let moved = self.wizard.advance();
        if moved {
            self.on_step_changed();
        }
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.wizard.retreat();
        if moved {
            self.on_step_changed();
        }
        moved
    }

    /// Submit the quote request if the contact details are complete
    pub fn submit(&mut self) -> bool {
        let mut sink = TrackedSink {
            inner: &mut self.submission_log,
            failure: None,
        };
        let submitted = self.wizard.submit(&mut sink);
        let failure = sink.failure;

        match submitted {
            Some(submission) => {
                let price = self.settings.format_price(submission.record.quote);
                self.notifications.push(Notification::success(format!(
                    "Quote request {} sent. Estimate: {}",
                    submission.id, price
                )));
                if let Some(reason) = failure {
                    self.notifications.push(Notification::error(format!(
                        "Could not record the request: {}",
                        reason
                    )));
                }
                self.set_status(format!("Submitted {}", submission.id));
                self.last_submission = Some(submission);
                true
            }
            None => {
                self.set_status("Name, email and phone number are required");
                false
            }
        }
    }

    /// Discard the session and every UI buffer
    pub fn start_over(&mut self) {
        self.wizard.reset();
        self.device_cursor = 0;
        self.model_cursor = 0;
        self.issue_cursor = 0;
        for input in [
            &mut self.location_input,
            &mut self.name_input,
            &mut self.email_input,
            &mut self.phone_input,
            &mut self.message_input,
        ] {
            input.clear();
        }
        self.contact = ContactStep::new(self.settings.default_contact_method);
        self.last_submission = None;
        self.on_step_changed();
        self.notifications.push(Notification::info("Started a new quote"));
        info!("wizard reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceCategory, IssueKind};
    use crate::tui::widgets::NotificationKind;
    use tempfile::TempDir;

    fn ready_to_submit(app: &mut App) {
        app.wizard
            .update_field(FieldUpdate::Device(Some(DeviceCategory::Watch)));
        app.advance();
        app.wizard
            .update_field(FieldUpdate::Model("apple-watch-se".into()));
        app.advance();
        app.wizard
            .update_field(FieldUpdate::Issues(vec![IssueKind::Battery].into()));
        app.advance();
        app.wizard.update_field(FieldUpdate::Location("Hialeah".into()));
        app.advance();
        app.wizard.update_field(FieldUpdate::Name("Kim".into()));
        app.wizard.update_field(FieldUpdate::Email("kim@example.com".into()));
        app.wizard.update_field(FieldUpdate::Phone("305-555-0199".into()));
    }

    #[test]
    fn test_failed_recording_still_submits() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        // A directory where the log file should be makes appends fail
        std::fs::create_dir_all(paths.submissions_log()).unwrap();
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        ready_to_submit(&mut app);
        assert!(app.submit());

        assert_eq!(app.last_submission.as_ref().unwrap().record.quote, 98);
        assert_eq!(
            app.notifications.current().unwrap().kind,
            NotificationKind::Success
        );
        // The error toast waits behind the success toast instead of expiring with it
        app.notifications.remove_expired();
        assert_eq!(app.notifications.len(), 2);
        assert!(app.notifications.current().unwrap().message.ends_with("Estimate: $98"));
    }

    #[test]
    fn test_sync_cursors_follows_selection() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        app.wizard
            .update_field(FieldUpdate::Device(Some(DeviceCategory::Computer)));
        app.wizard.update_field(FieldUpdate::Model("mac-mini".into()));
        app.sync_cursors();

        assert_eq!(app.device_cursor, 3);
        assert_eq!(app.model_cursor, 3);
    }
}
