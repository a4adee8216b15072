//! In-process game simulation for demos and tests.
use std::sync::Mutex;

use async_trait::async_trait;

use game_core::{Game, Player};

use crate::error::Result;
use crate::source::GameSource;

/// A deterministic, self-advancing game.
///
/// Every fetch advances the tick by one and drifts the players' statistics
/// using a seeded xorshift generator, so two sources built from the same
/// roster and seed replay the same history. Useful when no real game is
/// reachable and as the backing source for runtime tests.
pub struct SimulatedSource {
    state: Mutex<SimState>,
}

struct SimState {
    game: Game,
    seed: u64,
}

impl SimulatedSource {
    pub fn new(game: Game, seed: u64) -> Self {
        Self {
            state: Mutex::new(SimState {
                game,
                // xorshift has a fixed point at zero
                seed: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
            }),
        }
    }

    /// A six-player demo game.
    pub fn demo() -> Self {
        let mut game = Game::new(1, "Nebula's Reach", 24);
        let roster: [(&str, u32, u32, u32); 6] = [
            ("ada", 8, 120, 14),
            ("bix", 6, 95, 11),
            ("cora", 6, 80, 9),
            ("dax", 4, 60, 12),
            ("elya", 3, 45, 7),
            ("fenn", 2, 30, 5),
        ];
        for (alias, stars, ships, economy) in roster {
            game.insert_player(Player {
                stars,
                ships,
                economy,
                industry: economy / 2,
                science: 4,
                ..Player::new(alias)
            });
        }
        Self::new(game, 0x5EED)
    }
}

#[async_trait]
impl GameSource for SimulatedSource {
    async fn fetch(&self) -> Result<Game> {
        let mut state = self.state.lock().expect("simulated game lock poisoned");
        state.advance();
        Ok(state.game.clone())
    }
}

impl SimState {
    fn advance(&mut self) {
        self.game.tick += 1;
        self.game.is_started = true;

        for mut player in self.game.take_players() {
            self.seed = xorshift(self.seed);
            let roll = self.seed;

            player.ships += (roll % 7) as u32;
            player.economy += ((roll >> 16) % 3) as u32;
            player.industry += ((roll >> 24) % 2) as u32;
            player.science += ((roll >> 32) % 2) as u32;
            if roll % 5 == 0 {
                player.stars += 1;
            }
            self.game.insert_player(player);
        }
    }
}

fn xorshift(mut x: u64) -> u64 {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_advances_the_tick() {
        let source = SimulatedSource::demo();
        let first = source.fetch().await.unwrap();
        let second = source.fetch().await.unwrap();
        assert_eq!(first.tick + 1, second.tick);
        assert!(second.is_started);
    }

    #[tokio::test]
    async fn fetched_snapshots_pass_validation() {
        let source = SimulatedSource::demo();
        for _ in 0..10 {
            let game = source.fetch().await.unwrap();
            game.validate().unwrap();
            assert_eq!(game.player_count(), 6);
        }
    }

    #[tokio::test]
    async fn same_seed_replays_the_same_history() {
        let a = SimulatedSource::demo();
        let b = SimulatedSource::demo();
        for _ in 0..5 {
            assert_eq!(a.fetch().await.unwrap(), b.fetch().await.unwrap());
        }
    }
}
