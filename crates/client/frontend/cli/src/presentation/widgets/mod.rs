pub mod header;
pub mod leaderboard;
pub mod status;
