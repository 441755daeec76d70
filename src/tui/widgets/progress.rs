//! Step progress header
//!
//! Draws the numbered step markers on one line and the fill bar under them.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

use crate::wizard::{Progress, StepState};

pub struct ProgressHeader<'a> {
    progress: &'a Progress<'a>,
}

impl<'a> ProgressHeader<'a> {
    pub fn new(progress: &'a Progress<'a>) -> Self {
        Self { progress }
    }
}

fn marker_style(state: StepState) -> Style {
    match state {
        StepState::Completed => Style::default().fg(Color::Green),
        StepState::Active => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        StepState::Pending => Style::default().fg(Color::DarkGray),
    }
}

fn marker_symbol(state: StepState, number: usize) -> String {
    match state {
        StepState::Completed => "[✓]".to_string(),
        StepState::Active | StepState::Pending => format!("[{}]", number),
    }
}

impl Widget for ProgressHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let mut spans = Vec::new();
        for (i, marker) in self.progress.markers.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ─ ", Style::default().fg(Color::DarkGray)));
            }
            let style = marker_style(marker.state);
            spans.push(Span::styled(marker_symbol(marker.state, marker.number), style));
            spans.push(Span::styled(format!(" {}", marker.label), style));
        }
        Paragraph::new(Line::from(spans))
            .centered()
            .render(rows[0], buf);

        LineGauge::default()
            .filled_style(Style::default().fg(Color::Cyan))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .label(format!("{:>3}%", (self.progress.fill * 100.0).round() as u32))
            .ratio(self.progress.fill)
            .render(rows[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;

    #[test]
    fn test_renders_markers() {
        let labels = Step::labels();
        let progress = Progress::new(2, &labels);
        let area = Rect::new(0, 0, 70, 2);
        let mut buf = Buffer::empty(area);

        ProgressHeader::new(&progress).render(area, &mut buf);

        let top: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains("[✓] Device"));
        assert!(top.contains("[2] Model"));
        assert!(top.contains("[5] Quote"));
    }
}
