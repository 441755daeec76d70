//! TUI Views module
//!
//! One view per wizard step body, plus the shared heading, navigation footer
//! and status bar.

pub mod location;
pub mod quote;
pub mod selection;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::WizardLayout;
use super::widgets::{notification::toast_area, ProgressHeader};
use crate::models::Step;
use crate::wizard::Progress;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = WizardLayout::new(frame.area());
    let step = app.step();

    let labels = Step::labels();
    let progress = Progress::new(app.wizard.position(), &labels);
    frame.render_widget(ProgressHeader::new(&progress), layout.progress);

    render_heading(frame, step, layout.heading);

    match step {
        Step::Device => selection::render_devices(frame, app, layout.body),
        Step::Model => selection::render_models(frame, app, layout.body),
        Step::Issue => selection::render_issues(frame, app, layout.body),
        Step::Location => location::render(frame, app, layout.body),
        Step::Quote => quote::render(frame, app, layout.body),
    }

    render_footer(frame, app, layout.footer);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(notification, toast_area(frame.area()));
    }

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame, app);
    }
}

fn render_heading(frame: &mut Frame, step: Step, area: Rect) {
    let lines = vec![
        Line::styled(
            step.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(step.subtitle(), Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

/// Back / Continue line under the body
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let wizard = &app.wizard;
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let back = if wizard.step() == Step::FIRST {
        Span::styled("       ", disabled)
    } else {
        Span::styled("< Back (Esc)", enabled)
    };

    let (label, ready) = match wizard.step() {
        Step::Quote => ("Submit (Enter) >", wizard.can_submit()),
        _ => ("Continue (Enter) >", wizard.can_advance()),
    };
    let forward = if ready {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, disabled)
    };

    let padding = (area.width as usize)
        .saturating_sub(back.width() + forward.width() + 2)
        .max(1);
    let line = Line::from(vec![
        Span::raw(" "),
        back,
        Span::raw(" ".repeat(padding)),
        forward,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
