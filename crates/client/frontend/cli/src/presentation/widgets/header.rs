//! Header widget displaying the game overview.
use client_frontend_core::DashboardViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardViewModel) {
    let line = match view.overview() {
        Some(overview) => {
            let phase = if overview.is_game_over {
                " [GAME OVER]"
            } else if !overview.is_started {
                " [LOBBY]"
            } else {
                ""
            };

            Line::from(vec![
                Span::styled(
                    overview.name.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" | Tick: "),
                Span::styled(
                    overview.tick.to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(" | Cycle: "),
                Span::styled(
                    (overview.tick / overview.production_rate.max(1)).to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(" | Players: "),
                Span::styled(
                    overview.player_count.to_string(),
                    Style::default().fg(Color::LightGreen),
                ),
                Span::styled(
                    phase,
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "Waiting for the first snapshot...",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
