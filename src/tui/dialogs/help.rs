//! Help overlay
//!
//! A two-column table of the global keys followed by the keys of the
//! current step.

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Row, Table},
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut rows = Vec::new();
    for context in [KeyContext::Global, KeyContext::for_step(app.step())] {
        rows.push(Row::new(vec![Cell::from(""), Cell::from(context.title())]).style(section_style));
        rows.extend(get_keybindings(context).into_iter().map(|kb| {
            Row::new(vec![
                Cell::from(format_keybinding(kb)).style(Style::default().fg(Color::Cyan)),
                Cell::from(kb.description),
            ])
        }));
        rows.push(Row::new(vec![Cell::from("")]));
    }
    rows.push(Row::new(vec![Cell::from(""), Cell::from("Press any key to close")])
        .style(Style::default().fg(Color::DarkGray)));

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(20)])
        .column_spacing(2)
        .block(block);

    frame.render_widget(table, area);
}
