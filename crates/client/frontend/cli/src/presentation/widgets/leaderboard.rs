//! Leaderboard widget: the exposed player list, highest-ranked first.
use client_frontend_core::DashboardViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardViewModel) {
    let header = Row::new([
        "#", "Alias", "Name", "Stars", "Ships", "Economy", "Industry", "Science",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = view.players.players().iter().enumerate().map(|(i, player)| {
        let style = if player.is_active {
            Style::default()
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        };

        Row::new([
            Cell::from((i + 1).to_string()),
            Cell::from(player.alias.clone()),
            Cell::from(player.name.clone().unwrap_or_default()),
            Cell::from(player.stars.to_string()),
            Cell::from(player.ships.to_string()),
            Cell::from(player.economy.to_string()),
            Cell::from(player.industry.to_string()),
            Cell::from(player.science.to_string()),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Min(16),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Leaderboard "),
    );

    frame.render_widget(table, area);
}
