//! Selection step bodies
//!
//! Device and model are single choice, issues are multiple choice with an
//! explicit continue.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_column;
use crate::tui::widgets::{Card, CardGrid};

const BODY_WIDTH: u16 = 90;

/// Render the device step
pub fn render_devices(frame: &mut Frame, app: &App, area: Rect) {
    let select = app.device_select();
    let cards = select
        .entries()
        .iter()
        .map(|entry| Card {
            label: entry.display_name,
            selected: select.is_selected(entry.id),
        })
        .collect();

    frame.render_widget(
        CardGrid::new(cards, app.device_cursor),
        centered_column(BODY_WIDTH, area),
    );
}

/// Render the model step for the chosen device
pub fn render_models(frame: &mut Frame, app: &App, area: Rect) {
    let select = app.model_select();
    let area = centered_column(BODY_WIDTH, area);

    if select.entries().is_empty() {
        frame.render_widget(
            Paragraph::new("Choose a device first").style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let cards = select
        .entries()
        .iter()
        .map(|entry| Card {
            label: entry.display_name,
            selected: select.is_selected(entry.id),
        })
        .collect();

    frame.render_widget(CardGrid::new(cards, app.model_cursor), area);
}

/// Render the issue step with its selection count
pub fn render_issues(frame: &mut Frame, app: &App, area: Rect) {
    let select = app.issue_select();
    let area = centered_column(BODY_WIDTH, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(area);

    let cards = select
        .entries()
        .iter()
        .map(|entry| Card {
            label: entry.display_name,
            selected: select.is_selected(entry.id),
        })
        .collect();
    frame.render_widget(CardGrid::new(cards, app.issue_cursor).multi(true), chunks[0]);

    let selected = &app.wizard.record().issues;
    let summary = if selected.is_empty() {
        Line::styled("No issues selected", Style::default().fg(Color::DarkGray))
    } else {
        Line::styled(
            format!("Selected: {}", selected.joined_names()),
            Style::default().fg(Color::Green),
        )
    };
    frame.render_widget(Paragraph::new(summary), chunks[1]);
}
