//! Card grid for the selection steps
//!
//! Renders catalog entries as bordered cards, a fixed number per row. The
//! highlight cursor is owned by the caller; selection marks come from the
//! wizard's selection contracts.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Cards per row
pub const GRID_COLUMNS: usize = 3;

const CARD_HEIGHT: u16 = 4;

/// One card: a display name and whether it is part of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub label: &'a str,
    pub selected: bool,
}

pub struct CardGrid<'a> {
    cards: Vec<Card<'a>>,
    cursor: usize,
    /// Draw checkboxes instead of radio marks
    multi: bool,
}

impl<'a> CardGrid<'a> {
    pub fn new(cards: Vec<Card<'a>>, cursor: usize) -> Self {
        Self {
            cards,
            cursor,
            multi: false,
        }
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    fn mark(&self, selected: bool) -> &'static str {
        match (self.multi, selected) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            (false, true) => "(•)",
            (false, false) => "( )",
        }
    }
}

/// Move a grid cursor by `delta` cells, clamped to `len`
pub fn step_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let target = cursor as isize + delta;
    target.clamp(0, len as isize - 1) as usize
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let row_count = self.cards.len().div_ceil(GRID_COLUMNS);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                std::iter::repeat(Constraint::Length(CARD_HEIGHT))
                    .take(row_count)
                    .chain(std::iter::once(Constraint::Min(0))),
            )
            .split(area);

        for (index, card) in self.cards.iter().enumerate() {
            let row = index / GRID_COLUMNS;
            let column = index % GRID_COLUMNS;
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(rows[row]);

            let highlighted = index == self.cursor;
            let border_style = if highlighted {
                Style::default().fg(Color::Cyan)
            } else if card.selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label_style = if card.selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if highlighted {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border_style);

            Paragraph::new(vec![
                Line::styled(self.mark(card.selected), label_style),
                Line::styled(card.label, label_style),
            ])
            .centered()
            .block(block)
            .render(cells[column], buf);
        }
    }
}
