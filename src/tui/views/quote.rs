//! Quote step body
//!
//! The contact form on the left, the read-only summary with the price and
//! the store on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::ContactMethod;
use crate::tui::app::App;
use crate::tui::layout::QuoteLayout;
use crate::wizard::contact::{SELECTED_STORE, TURNAROUND_NOTE};
use crate::wizard::{ContactField, QuoteSummary};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = QuoteLayout::new(area);
    render_form(frame, app, layout.form);
    render_summary(frame, app, layout.summary);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Method
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Message
            Constraint::Min(0),
        ])
        .split(area);

    let method_focused = app.contact.focused == ContactField::Method;
    let mut spans = Vec::new();
    for method in ContactMethod::ALL {
        let mark = if method == app.contact.method {
            "(•) "
        } else {
            "( ) "
        };
        let style = if method == app.contact.method {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{}{}   ", mark, method.label()), style));
    }
    let method_block = Block::default()
        .title(format!(" {} ", ContactField::Method.label()))
        .borders(Borders::ALL)
        .border_style(focus_style(method_focused));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(method_block), chunks[0]);

    let fields = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];
    for (field, chunk) in fields.into_iter().zip(chunks[1..].iter()) {
        let Some(input) = app.contact_input(field) else {
            continue;
        };
        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(focus_style(app.contact.focused == field));
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);
        frame.render_widget(input, inner);
    }
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary = QuoteSummary::from_record(app.wizard.record());
    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::White);

    let mut lines: Vec<Line> = summary
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<10}", label), label_style),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", "Price"), label_style),
        Span::styled(
            app.settings.format_price(summary.quote),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::styled("Description", label_style));
    lines.push(Line::styled(TURNAROUND_NOTE, value_style));
    lines.push(Line::from(""));
    lines.push(Line::styled("Selected Store", label_style));
    lines.push(Line::from(vec![
        Span::styled(
            format!("[{}] ", SELECTED_STORE.initials),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            SELECTED_STORE.name,
            value_style.add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::styled(SELECTED_STORE.address.join(" "), value_style));
    lines.push(Line::styled(SELECTED_STORE.phone, value_style));

    let block = Block::default()
        .title(" Your Quote ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
