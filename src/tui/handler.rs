//! Event handler for the TUI
//!
//! Routes key events to the wizard based on the active step. Every change to
//! the form record goes through the controller's update entry point.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;
use super::widgets::selection::{step_cursor, GRID_COLUMNS};
use crate::models::{FieldUpdate, Step};
use crate::wizard::{ContactField, SelectionEvent};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('r') => app.start_over(),
            _ => {}
        }
        return Ok(());
    }

    // Any key closes help
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => {
            app.retreat();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.open_help();
            return Ok(());
        }
        KeyCode::Char('q') | KeyCode::Char('Q') if !app.is_editing_text() => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') if !app.is_editing_text() => {
            app.open_help();
            return Ok(());
        }
        _ => {}
    }

    match app.step() {
        Step::Device => handle_device_key(app, key),
        Step::Model => handle_model_key(app, key),
        Step::Issue => handle_issue_key(app, key),
        Step::Location => handle_location_key(app, key),
        Step::Quote => handle_quote_key(app, key),
    }

    Ok(())
}

/// Cursor movement shared by the card grids
fn grid_delta(code: KeyCode) -> Option<isize> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(-1),
        KeyCode::Right | KeyCode::Char('l') => Some(1),
        KeyCode::Up | KeyCode::Char('k') => Some(-(GRID_COLUMNS as isize)),
        KeyCode::Down | KeyCode::Char('j') => Some(GRID_COLUMNS as isize),
        _ => None,
    }
}

fn handle_device_key(app: &mut App, key: KeyEvent) {
    let select = app.device_select();
    if let Some(delta) = grid_delta(key.code) {
        app.device_cursor = step_cursor(app.device_cursor, delta, select.entries().len());
        return;
    }

    // Picking a device moves straight on
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        if let Some(SelectionEvent::Select(device)) = select.activate(app.device_cursor) {
            app.wizard.update_field(FieldUpdate::Device(Some(device)));
            app.advance();
        }
    }
}

fn handle_model_key(app: &mut App, key: KeyEvent) {
    let select = app.model_select();
    if let Some(delta) = grid_delta(key.code) {
        app.model_cursor = step_cursor(app.model_cursor, delta, select.entries().len());
        return;
    }

    match key.code {
        KeyCode::Char(' ') => {
            if let Some(SelectionEvent::Select(model)) = select.activate(app.model_cursor) {
                app.wizard.update_field(FieldUpdate::Model(model.to_string()));
            }
        }
        KeyCode::Enter => {
            if let Some(SelectionEvent::Select(model)) = select.activate(app.model_cursor) {
                app.wizard.update_field(FieldUpdate::Model(model.to_string()));
            }
            app.advance();
        }
        _ => {}
    }
}

fn handle_issue_key(app: &mut App, key: KeyEvent) {
    let len = app.issue_select().entries().len();
    if let Some(delta) = grid_delta(key.code) {
        app.issue_cursor = step_cursor(app.issue_cursor, delta, len);
        return;
    }

    let event = match key.code {
        KeyCode::Char(' ') => app.issue_select().toggle(app.issue_cursor),
        KeyCode::Enter => Some(app.issue_select().press_continue()),
        _ => None,
    };

    match event {
        Some(SelectionEvent::SelectionChange(issues)) => {
            app.wizard.update_field(FieldUpdate::Issues(issues));
            app.clear_status();
        }
        Some(SelectionEvent::Continue) => {
            if !app.advance() {
                app.set_status("Select at least one issue to continue");
            }
        }
        _ => {}
    }
}

/// Shared editing keys; returns true if the key changed the text
fn edit_focused_input(app: &mut App, key: KeyEvent) -> bool {
    let Some(input) = app.focused_input_mut() else {
        return false;
    };

    match key.code {
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}

fn handle_location_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        if !app.advance() {
            app.set_status("Enter a location to continue");
        }
        return;
    }

    if edit_focused_input(app, key) {
        app.commit_focused_input();
    }
}

fn handle_quote_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.contact.next_field();
            app.sync_focus();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact.prev_field();
            app.sync_focus();
        }
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            if app.contact.focused == ContactField::Method =>
        {
            app.contact.toggle_method();
        }
        _ => {
            if edit_focused_input(app, key) {
                app.commit_focused_input();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{QuotePaths, Settings};
    use crate::models::{ContactMethod, DeviceCategory, IssueKind};
    use crate::submissions::SubmissionLog;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_full_flow_submits_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        // Tablet is the first card; Enter selects and advances
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step(), Step::Model);
        assert_eq!(app.wizard.record().device, Some(DeviceCategory::Tablet));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step(), Step::Issue);
        assert_eq!(app.wizard.record().model, "ipad-pro");

        // Continue without issues stays put
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step(), Step::Issue);

        press(&mut app, KeyCode::Char(' '));
        for _ in 0..5 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.wizard.record().issues.as_slice(),
            &[IssueKind::Battery, IssueKind::Overheats]
        );
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step(), Step::Location);

        type_text(&mut app, "Miami");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step(), Step::Quote);
        assert_eq!(app.wizard.record().quote, 168);

        // 'q' is text while a contact field has focus
        type_text(&mut app, "quinn");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "quinn@example.com");

        press(&mut app, KeyCode::Enter);
        assert!(app.last_submission.is_none());

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "305-555-0100");
        press(&mut app, KeyCode::Enter);

        let submission = app.last_submission.clone().unwrap();
        assert_eq!(submission.record.name, "quinn");
        assert_eq!(submission.record.quote, 168);
        assert_eq!(app.step(), Step::Quote);
        assert_eq!(app.notifications.len(), 1);

        let log = SubmissionLog::new(paths.submissions_log());
        assert_eq!(log.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_escape_goes_back_without_clearing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.step(), Step::Device);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.step(), Step::Model);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.step(), Step::Device);
        assert_eq!(app.wizard.record().device, Some(DeviceCategory::Phone));
        assert_eq!(app.device_cursor, 1);
    }

    #[test]
    fn test_space_selects_model_without_advancing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.step(), Step::Model);
        assert_eq!(app.wizard.record().model, "ipad-mini");
    }

    #[test]
    fn test_quit_keys() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let mut app = App::new(&settings, &paths);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&settings, &paths);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
        assert_eq!(app.step(), Step::Device);
    }

    #[test]
    fn test_contact_method_toggle_stays_local() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Doral");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.step(), Step::Quote);

        let before = app.wizard.record().clone();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.contact.focused, ContactField::Method);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.contact.method, ContactMethod::Email);
        assert_eq!(app.wizard.record(), &before);
    }

    #[test]
    fn test_start_over_clears_everything() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        )
        .unwrap();

        assert_eq!(app.step(), Step::Device);
        assert_eq!(app.wizard.record().device, None);
        assert!(app.location_input.value().is_empty());
    }

    #[test]
    fn test_submissions_not_recorded_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QuotePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            record_submissions: false,
            ..Settings::default()
        };
        let app = App::new(&settings, &paths);
        assert!(app.submission_log.is_none());
    }
}
