//! Domain model for the dashboard, shared across clients.
//!
//! `game-core` defines the snapshot types delivered by snapshot sources and
//! consumed by presentation layers: a [`Game`] carries the de-duplicated,
//! domain-ordered set of [`Player`]s observed at a given tick. The types are
//! plain data; acquisition and presentation live in supporting crates.
pub mod error;
pub mod game;
pub mod player;

pub use error::GameError;
pub use game::Game;
pub use player::Player;
