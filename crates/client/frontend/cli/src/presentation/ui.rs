//! Main render entry point composing the dashboard widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use client_frontend_core::DashboardViewModel;

use crate::presentation::{terminal::Tui, widgets};

/// Render the full dashboard: header, leaderboard, status line.
pub fn render(terminal: &mut Tui, view: &DashboardViewModel) -> Result<()> {
    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], view);
        widgets::leaderboard::render(frame, chunks[1], view);
        widgets::status::render(frame, chunks[2], view);
    })?;

    Ok(())
}
