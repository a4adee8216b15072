//! Player entity and the domain ordering used for ranking.
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One participant in a game.
///
/// Players carry the statistics reported by the game at the last observed
/// tick. The `alias` is the in-game identity; `name` is an optional display
/// name configured locally (see the runtime's display-name overrides).
///
/// # Ordering
///
/// `Player` has a total order used both for set membership inside
/// [`crate::Game`] and as the ranking rule for leaderboards: ascending by
/// `(stars, ships, economy, alias)`. The alias tie-break makes the order
/// total over distinct participants, so a `BTreeSet<Player>` can never hold
/// two entries for the same alias with the same standing. Equality is
/// agreement under this ordering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// In-game identity. Never empty in a valid snapshot.
    pub alias: String,
    /// Locally configured display name, if any.
    pub name: Option<String>,
    pub stars: u32,
    pub ships: u32,
    pub economy: u32,
    pub industry: u32,
    pub science: u32,
    /// Whether the participant is still playing (not defeated or AFK).
    pub is_active: bool,
}

impl Player {
    /// Creates a player with the given alias and zeroed statistics.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: None,
            stars: 0,
            ships: 0,
            economy: 0,
            industry: 0,
            science: 0,
            is_active: true,
        }
    }

    /// Name shown in UIs: the configured display name when present,
    /// otherwise the in-game alias.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.alias)
    }

    /// The tuple the domain ordering compares.
    fn ranking_key(&self) -> (u32, u32, u32, &str) {
        (self.stars, self.ships, self.economy, &self.alias)
    }
}

impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranking_key().cmp(&other.ranking_key())
    }
}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Player {}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(alias: &str, stars: u32, ships: u32, economy: u32) -> Player {
        Player {
            stars,
            ships,
            economy,
            ..Player::new(alias)
        }
    }

    #[test]
    fn orders_by_stars_first() {
        let weak = player("zara", 3, 900, 900);
        let strong = player("ada", 5, 1, 1);
        assert!(weak < strong);
    }

    #[test]
    fn ships_break_star_ties() {
        let fewer = player("ada", 5, 10, 50);
        let more = player("bo", 5, 20, 1);
        assert!(fewer < more);
    }

    #[test]
    fn alias_is_the_final_tie_break() {
        let a = player("ada", 5, 10, 7);
        let b = player("bo", 5, 10, 7);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn equality_ignores_display_only_fields() {
        let mut a = player("ada", 5, 10, 7);
        let mut b = player("ada", 5, 10, 7);
        a.name = Some("Ada L.".to_string());
        b.science = 42;
        assert_eq!(a, b);
    }

    #[test]
    fn display_name_falls_back_to_alias() {
        let mut p = Player::new("ada");
        assert_eq!(p.display_name(), "ada");
        p.name = Some("Ada L.".to_string());
        assert_eq!(p.display_name(), "Ada L.");
    }
}
