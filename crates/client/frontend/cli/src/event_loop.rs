//! Pumps runtime events, user input, and rendering for the CLI client.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use runtime::{GameEvent, RuntimeHandle};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::{self, Duration};

use client_frontend_core::{DashboardViewModel, EventConsumer};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};

pub struct EventLoop {
    handle: RuntimeHandle,
    event_rx: broadcast::Receiver<GameEvent>,
    input: InputHandler,
    view: DashboardViewModel,
    config: CliConfig,
}

impl EventLoop {
    pub fn new(handle: RuntimeHandle, config: CliConfig) -> Self {
        let event_rx = handle.subscribe_events();
        Self {
            handle,
            event_rx,
            input: InputHandler,
            view: DashboardViewModel::new(),
            config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        // Seed the view from whatever the runtime accepted before we
        // subscribed; later snapshots arrive as events.
        if let Some(game) = self.handle.query_snapshot().await? {
            self.view.apply_snapshot(&game);
        }
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.event_rx.recv() => {
                    if self.handle_runtime_channel(result, terminal)? {
                        break;
                    }
                }
                _ = time::sleep(self.config.frame_interval) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns true when the loop should exit.
    fn handle_runtime_channel(
        &mut self,
        result: Result<GameEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.view.on_event(&event);
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Lagged(skipped)) => {
                // Older events only carried stale snapshots; the next
                // received one supersedes them all.
                tracing::warn!("event receiver lagged, skipped {skipped} events");
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::info!("runtime event channel closed, exiting");
                Ok(true)
            }
        }
    }

    /// Drains pending keyboard input. Returns true when the user quit.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match self.input.handle_key(key) {
                KeyAction::Quit => return Ok(true),
                KeyAction::Refresh => {
                    if let Err(err) = self.handle.refresh().await {
                        tracing::warn!("manual refresh failed: {err}");
                        self.render(terminal)?;
                    }
                }
                KeyAction::None => {}
            }
        }
        Ok(false)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(terminal, &self.view)
    }
}
