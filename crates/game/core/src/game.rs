//! Game snapshot as observed at a single tick.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::player::Player;

/// Snapshot of one game at a point in time.
///
/// The player collection is a `BTreeSet` keyed by the domain ordering, so a
/// snapshot can never contain duplicate players under that ordering and
/// iteration yields players in ascending rank. Consumers that want
/// "highest-ranked first" reverse the order themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// External identifier of the game on the hosting service.
    pub number: u32,
    pub name: String,
    /// Production tick counter. Advances monotonically on the server.
    pub tick: u32,
    /// Ticks per production cycle.
    pub production_rate: u32,
    pub is_started: bool,
    pub is_game_over: bool,
    players: BTreeSet<Player>,
}

impl Game {
    /// Creates a snapshot with no players at tick zero.
    pub fn new(number: u32, name: impl Into<String>, production_rate: u32) -> Self {
        Self {
            number,
            name: name.into(),
            tick: 0,
            production_rate,
            is_started: false,
            is_game_over: false,
            players: BTreeSet::new(),
        }
    }

    /// The current player set, ascending by the domain ordering.
    pub fn players(&self) -> &BTreeSet<Player> {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Inserts a player, replacing any entry with equal standing under the
    /// domain ordering.
    pub fn insert_player(&mut self, player: Player) {
        self.players.replace(player);
    }

    /// Removes and returns all players, leaving the snapshot empty.
    pub fn take_players(&mut self) -> BTreeSet<Player> {
        std::mem::take(&mut self.players)
    }

    /// Checks the invariants every published snapshot must satisfy.
    ///
    /// Sources call this before handing a fetched snapshot to the rest of
    /// the application; presentation layers may assume it has passed.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.name.trim().is_empty() {
            return Err(GameError::InvalidSnapshot("game name is empty".into()));
        }
        if self.production_rate == 0 {
            return Err(GameError::InvalidSnapshot(
                "production rate must be at least 1".into(),
            ));
        }
        if let Some(player) = self.players.iter().find(|p| p.alias.trim().is_empty()) {
            return Err(GameError::InvalidSnapshot(format!(
                "player with stars={} has an empty alias",
                player.stars
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(alias: &str, stars: u32) -> Player {
        Player {
            stars,
            ..Player::new(alias)
        }
    }

    #[test]
    fn insert_replaces_equal_standing() {
        let mut game = Game::new(1, "Close Encounters", 24);
        game.insert_player(player("ada", 5));
        game.insert_player(player("ada", 5));
        assert_eq!(game.player_count(), 1);
    }

    #[test]
    fn players_iterate_in_ascending_rank() {
        let mut game = Game::new(1, "Close Encounters", 24);
        game.insert_player(player("bob", 90));
        game.insert_player(player("alice", 40));
        game.insert_player(player("carol", 65));

        let stars: Vec<u32> = game.players().iter().map(|p| p.stars).collect();
        assert_eq!(stars, vec![40, 65, 90]);
    }

    #[test]
    fn validate_rejects_empty_name() {
        let game = Game::new(1, "  ", 24);
        assert!(game.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_production_rate() {
        let game = Game::new(1, "Close Encounters", 0);
        assert!(game.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_alias() {
        let mut game = Game::new(1, "Close Encounters", 24);
        game.insert_player(player("", 5));
        assert!(game.validate().is_err());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut game = Game::new(7, "Twin Suns", 12);
        game.tick = 36;
        game.is_started = true;
        game.insert_player(player("ada", 5));

        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }
}
