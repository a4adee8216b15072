//! View-model types derived from [`game_core::Game`] snapshots.
use std::cmp::Ordering;

use game_core::{Game, Player};
use runtime::GameEvent;

use crate::event::{EventConsumer, EventImpact};
use crate::observable::{ListChange, ObservableList, SubscriptionId};

/// Comparator deciding leaderboard display order. `Less` means "rendered
/// earlier", so the default comparator puts the highest-ranked player first.
pub type PlayerRanking = Box<dyn Fn(&Player, &Player) -> Ordering + Send>;

/// Publishes a game's player set as an observable, rank-ordered list.
///
/// The exposed list is created empty at construction and reused in place for
/// the component's whole lifetime: observers registered once keep receiving
/// notifications across every later [`update`](Self::update). The list's
/// contents always equal the player set of the most recently applied
/// snapshot, ordered highest-ranked first. The upstream [`Game`] guarantees
/// uniqueness; this component never de-duplicates on its own.
pub struct PlayersViewModel {
    players: ObservableList<Player>,
    ranking: PlayerRanking,
}

impl PlayersViewModel {
    /// View model ordering players by the reverse of the domain ordering.
    pub fn new() -> Self {
        Self::with_ranking(Box::new(|a, b| b.cmp(a)))
    }

    /// View model with a custom display-order comparator.
    pub fn with_ranking(ranking: PlayerRanking) -> Self {
        Self {
            players: ObservableList::new(),
            ranking,
        }
    }

    /// The exposed list. Not a snapshot: the same list reflects all future
    /// updates. Read-only from the outside; only `update` mutates it.
    pub fn players(&self) -> &ObservableList<Player> {
        &self.players
    }

    /// Registers an observer on the exposed list.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&[Player], ListChange) + Send + 'static,
    ) -> SubscriptionId {
        self.players.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.players.unsubscribe(id)
    }

    /// Replaces the exposed list's contents with `game`'s players, sorted by
    /// the display comparator, and notifies observers once.
    ///
    /// Accepts any valid snapshot, including one with zero players. Runs
    /// synchronously on the caller's task and completes before returning, so
    /// observers only ever see fully applied updates.
    pub fn update(&mut self, game: &Game) {
        let mut next: Vec<Player> = game.players().iter().cloned().collect();
        next.sort_by(|a, b| (self.ranking)(a, b));
        self.players.replace_with(next);
    }
}

impl Default for PlayersViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Header-level summary of the observed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverview {
    pub name: String,
    pub tick: u32,
    pub production_rate: u32,
    pub player_count: usize,
    pub is_started: bool,
    pub is_game_over: bool,
}

impl GameOverview {
    pub fn from_game(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            tick: game.tick,
            production_rate: game.production_rate,
            player_count: game.player_count(),
            is_started: game.is_started,
            is_game_over: game.is_game_over,
        }
    }
}

/// Aggregate presentation state for the dashboard screen.
///
/// Owns the [`PlayersViewModel`] and the header overview, and maps runtime
/// events onto them via [`EventConsumer`].
pub struct DashboardViewModel {
    pub players: PlayersViewModel,
    overview: Option<GameOverview>,
    last_error: Option<String>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self {
            players: PlayersViewModel::new(),
            overview: None,
            last_error: None,
        }
    }

    /// Header summary of the last applied snapshot, if any arrived yet.
    pub fn overview(&self) -> Option<&GameOverview> {
        self.overview.as_ref()
    }

    /// Most recent source failure, cleared by the next good snapshot.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Applies a fresh snapshot to every sub-view-model.
    pub fn apply_snapshot(&mut self, game: &Game) {
        self.players.update(game);
        self.overview = Some(GameOverview::from_game(game));
        self.last_error = None;
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EventConsumer for DashboardViewModel {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact {
        match event {
            GameEvent::SnapshotUpdated { game } => {
                self.apply_snapshot(game);
                EventImpact::redraw()
            }
            // The snapshot event carrying the same fetch drives the redraw.
            GameEvent::TickAdvanced { .. } => EventImpact::none(),
            GameEvent::SourceFailed { reason } => {
                self.last_error = Some(reason.clone());
                EventImpact::redraw()
            }
        }
    }
}
