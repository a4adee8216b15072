//! Status line: source failures and key hints.
use client_frontend_core::DashboardViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardViewModel) {
    let line = match view.last_error() {
        Some(reason) => Line::from(Span::styled(
            format!("source error: {reason}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit  "),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::raw(" refresh"),
        ]),
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
