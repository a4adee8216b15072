use game_core::Game;

/// Events emitted by the runtime while it tracks a game.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The accepted snapshot changed (contents differ from the previous one).
    SnapshotUpdated { game: Game },
    /// The game's production tick advanced between two accepted snapshots.
    TickAdvanced { from: u32, to: u32 },
    /// A fetch or validation failed. Polling continues.
    SourceFailed { reason: String },
}
