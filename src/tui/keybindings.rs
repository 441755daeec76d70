//! Keybinding definitions
//!
//! One table drives both the help overlay and the status bar hints.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::models::Step;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub context: KeyContext,
    /// Shown in the status bar as well as in help
    pub hint: bool,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Device and model steps
    Selection,
    /// Issue step
    Issues,
    /// Location step
    Location,
    /// Contact form on the quote step
    Contact,
    /// Help overlay
    Dialog,
}

impl KeyContext {
    /// Context of the body for a wizard step
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::Device | Step::Model => Self::Selection,
            Step::Issue => Self::Issues,
            Step::Location => Self::Location,
            Step::Quote => Self::Contact,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Selection => "Device & Model",
            Self::Issues => "Issues",
            Self::Location => "Location",
            Self::Contact => "Contact Details",
            Self::Dialog => "Help",
        }
    }
}

const fn kb(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    context: KeyContext,
    hint: bool,
) -> Keybinding {
    Keybinding {
        key,
        modifiers,
        description,
        context,
        hint,
    }
}

const NONE: KeyModifiers = KeyModifiers::NONE;

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    kb(KeyCode::Esc, NONE, "Back", KeyContext::Global, true),
    kb(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit", KeyContext::Global, false),
    kb(KeyCode::Char('q'), NONE, "Quit (outside text fields)", KeyContext::Global, false),
    kb(KeyCode::Char('?'), NONE, "Help (outside text fields)", KeyContext::Global, false),
    kb(KeyCode::F(1), NONE, "Help", KeyContext::Global, true),
    kb(KeyCode::Char('r'), KeyModifiers::CONTROL, "Start over", KeyContext::Global, false),
    // Device and model
    kb(KeyCode::Left, NONE, "Previous card", KeyContext::Selection, false),
    kb(KeyCode::Right, NONE, "Next card", KeyContext::Selection, false),
    kb(KeyCode::Up, NONE, "Row up", KeyContext::Selection, false),
    kb(KeyCode::Down, NONE, "Row down", KeyContext::Selection, false),
    kb(KeyCode::Char(' '), NONE, "Select", KeyContext::Selection, true),
    kb(KeyCode::Enter, NONE, "Select and continue", KeyContext::Selection, true),
    // Issues
    kb(KeyCode::Left, NONE, "Previous card", KeyContext::Issues, false),
    kb(KeyCode::Right, NONE, "Next card", KeyContext::Issues, false),
    kb(KeyCode::Char(' '), NONE, "Toggle issue", KeyContext::Issues, true),
    kb(KeyCode::Enter, NONE, "Continue", KeyContext::Issues, true),
    // Location
    kb(KeyCode::Enter, NONE, "Continue", KeyContext::Location, true),
    kb(KeyCode::Home, NONE, "Start of line", KeyContext::Location, false),
    kb(KeyCode::End, NONE, "End of line", KeyContext::Location, false),
    // Contact
    kb(KeyCode::Tab, NONE, "Next field", KeyContext::Contact, true),
    kb(KeyCode::BackTab, KeyModifiers::SHIFT, "Previous field", KeyContext::Contact, false),
    kb(KeyCode::Char(' '), NONE, "Switch contact method", KeyContext::Contact, false),
    kb(KeyCode::Enter, NONE, "Submit", KeyContext::Contact, true),
    // Dialog
    kb(KeyCode::Esc, NONE, "Close", KeyContext::Dialog, true),
];

/// Keybindings that belong to exactly this context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Compact hint text for the status bar
pub fn hint_text(context: KeyContext) -> String {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.hint && (kb.context == context || kb.context == KeyContext::Global))
        .map(|kb| format!("{}:{}", format_keybinding(kb), kb.description))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{:?}", other),
    };

    parts.push(key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let quit = &KEYBINDINGS[1];
        assert_eq!(format_keybinding(quit), "Ctrl+c");

        let toggle = get_keybindings(KeyContext::Issues)
            .into_iter()
            .find(|kb| kb.key == KeyCode::Char(' '))
            .unwrap();
        assert_eq!(format_keybinding(toggle), "Space");
    }

    #[test]
    fn test_hint_text_includes_globals() {
        let hints = hint_text(KeyContext::Issues);
        assert!(hints.contains("Esc:Back"));
        assert!(hints.contains("Space:Toggle issue"));
        assert!(hints.contains("Enter:Continue"));
        assert!(!hints.contains("Submit"));
    }

    #[test]
    fn test_every_step_has_bindings() {
        for step in Step::ALL {
            assert!(!get_keybindings(KeyContext::for_step(step)).is_empty());
        }
    }
}
