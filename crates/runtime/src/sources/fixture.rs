//! Snapshot source backed by a JSON file.
use std::path::PathBuf;

use async_trait::async_trait;

use game_core::Game;

use crate::error::{Result, RuntimeError};
use crate::source::GameSource;

/// Re-reads a JSON-encoded [`Game`] from disk on every fetch.
///
/// Useful when another process (or a cron job talking to the real game
/// service) keeps a snapshot file up to date: the dashboard picks up edits
/// on its next poll cycle.
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GameSource for FixtureSource {
    async fn fetch(&self) -> Result<Game> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RuntimeError::SourceFailed(format!("read {}: {e}", self.path.display()))
        })?;
        let game: Game = serde_json::from_str(&raw).map_err(|e| {
            RuntimeError::SourceFailed(format!("parse {}: {e}", self.path.display()))
        })?;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::Player;

    use super::*;

    #[tokio::test]
    async fn reads_a_snapshot_from_disk() {
        let mut game = Game::new(3, "Twin Suns", 12);
        game.tick = 48;
        game.insert_player(Player {
            stars: 9,
            ..Player::new("ada")
        });

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&game).unwrap()).unwrap();

        let source = FixtureSource::new(file.path());
        let fetched = source.fetch().await.unwrap();
        assert_eq!(fetched, game);
    }

    #[tokio::test]
    async fn malformed_json_is_a_source_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let source = FixtureSource::new(file.path());
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, RuntimeError::SourceFailed(_)));
    }

    #[tokio::test]
    async fn missing_file_is_a_source_failure() {
        let source = FixtureSource::new("/nonexistent/snapshot.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, RuntimeError::SourceFailed(_)));
    }
}
