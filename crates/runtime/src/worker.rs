//! Background worker driving the poll cycle.
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};

use game_core::Game;

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::event::GameEvent;
use crate::source::GameSource;

/// Requests sent from handles to the worker.
pub(crate) enum Command {
    /// Reply with the latest accepted snapshot, if any.
    QuerySnapshot {
        reply: oneshot::Sender<Option<Game>>,
    },
    /// Fetch immediately, outside the poll cycle.
    Refresh { reply: oneshot::Sender<Result<()>> },
    Shutdown,
}

/// Owns the source and the latest accepted snapshot.
///
/// Runs a select loop over the poll interval and the command channel until
/// shut down. All snapshot mutation happens here; handles only exchange
/// messages with it.
pub(crate) struct Worker {
    source: Box<dyn GameSource>,
    config: RuntimeConfig,
    latest: Option<Game>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl Worker {
    pub(crate) fn new(
        source: Box<dyn GameSource>,
        config: RuntimeConfig,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            source,
            config,
            latest: None,
            command_rx,
            event_tx,
        }
    }

    pub(crate) async fn run(mut self) {
        let mut poll = time::interval(self.config.poll_interval);
        poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = poll.tick() => {
                    // Errors were already published as events; the cycle goes on.
                    let _ = self.poll_once().await;
                }
                command = self.command_rx.recv() => match command {
                    Some(Command::QuerySnapshot { reply }) => {
                        let _ = reply.send(self.latest.clone());
                    }
                    Some(Command::Refresh { reply }) => {
                        let _ = reply.send(self.poll_once().await);
                    }
                    Some(Command::Shutdown) | None => break,
                },
            }
        }

        tracing::debug!("snapshot worker stopped");
    }

    async fn poll_once(&mut self) -> Result<()> {
        match self.fetch_validated().await {
            Ok(game) => {
                self.accept(game);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("snapshot fetch failed: {err}");
                self.publish(GameEvent::SourceFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    async fn fetch_validated(&self) -> Result<Game> {
        let mut game = self.source.fetch().await?;
        game.validate()?;
        self.apply_name_overrides(&mut game);
        Ok(game)
    }

    /// Attaches configured display names to matching aliases.
    fn apply_name_overrides(&self, game: &mut Game) {
        if self.config.player_names.is_empty() {
            return;
        }
        for mut player in game.take_players() {
            if let Some(name) = self.config.player_names.get(&player.alias) {
                player.name = Some(name.clone());
            }
            game.insert_player(player);
        }
    }

    fn accept(&mut self, game: Game) {
        if let Some(previous) = &self.latest
            && game.tick > previous.tick
        {
            self.publish(GameEvent::TickAdvanced {
                from: previous.tick,
                to: game.tick,
            });
        }

        if self.latest.as_ref() != Some(&game) {
            tracing::debug!(
                tick = game.tick,
                players = game.player_count(),
                "accepted new snapshot"
            );
            self.latest = Some(game.clone());
            self.publish(GameEvent::SnapshotUpdated { game });
        }
    }

    fn publish(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            // No subscribers yet - normal during startup.
            tracing::trace!("dropping event, no subscribers");
        }
    }
}
