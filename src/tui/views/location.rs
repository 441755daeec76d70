//! Location step body

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_column;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_column(60, Rect::new(area.x, area.y + 1, area.width, 3.min(area.height)));

    let block = Block::default()
        .title(" City / Area ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(&app.location_input, inner);
}
