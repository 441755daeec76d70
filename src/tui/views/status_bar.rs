//! Status bar view
//!
//! Shows the step counter, the current estimate once priced, any status
//! message and the key hints for the active step

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;
use crate::tui::keybindings::{hint_text, KeyContext};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let wizard = &app.wizard;
    let mut spans = vec![Span::styled(
        format!(" Step {}/{} ", wizard.position(), Step::ALL.len()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if wizard.step() == Step::Quote {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            format!("Estimate: {} ", app.settings.format_price(wizard.record().quote)),
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = format!(" {} ", hint_text(KeyContext::for_step(wizard.step())));

    // Hints are dropped when the terminal is too narrow for them
    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let hints_len = Span::raw(hints.as_str()).width();
    if let Some(padding_len) = (area.width as usize).checked_sub(left_len + hints_len) {
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(hints, Style::default().fg(Color::White)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
