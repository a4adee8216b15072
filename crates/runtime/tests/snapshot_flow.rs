//! End-to-end runtime behavior: polling, events, queries, refresh, shutdown.
use std::time::Duration;

use game_core::{Game, Player};
use runtime::{GameEvent, Runtime, RuntimeConfig, SimulatedSource};
use tokio::time::timeout;

fn fast_config() -> RuntimeConfig {
    RuntimeConfig {
        poll_interval: Duration::from_millis(20),
        ..RuntimeConfig::default()
    }
}

async fn next_snapshot(events: &mut tokio::sync::broadcast::Receiver<GameEvent>) -> Game {
    timeout(Duration::from_secs(5), async {
        loop {
            match events.recv().await.expect("event stream stays open") {
                GameEvent::SnapshotUpdated { game } => break game,
                _ => continue,
            }
        }
    })
    .await
    .expect("snapshot should arrive within the deadline")
}

#[tokio::test]
async fn polling_publishes_changed_snapshots() {
    let runtime = Runtime::start(fast_config(), Box::new(SimulatedSource::demo()));
    let handle = runtime.handle();
    let mut events = handle.subscribe_events();

    let first = next_snapshot(&mut events).await;
    assert_eq!(first.player_count(), 6);
    first.validate().expect("published snapshots are valid");

    let second = next_snapshot(&mut events).await;
    assert!(second.tick > first.tick, "simulation advances every poll");

    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn query_returns_the_latest_accepted_snapshot() {
    let runtime = Runtime::start(fast_config(), Box::new(SimulatedSource::demo()));
    let handle = runtime.handle();
    let mut events = handle.subscribe_events();

    let published = next_snapshot(&mut events).await;
    let queried = handle
        .query_snapshot()
        .await
        .expect("worker is alive")
        .expect("a snapshot was accepted already");

    assert!(queried.tick >= published.tick);

    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn manual_refresh_advances_the_tick() {
    // Long interval so only the startup poll and the manual refresh run.
    let config = RuntimeConfig {
        poll_interval: Duration::from_secs(3600),
        ..RuntimeConfig::default()
    };
    let runtime = Runtime::start(config, Box::new(SimulatedSource::demo()));
    let handle = runtime.handle();

    let before = timeout(Duration::from_secs(5), async {
        loop {
            if let Some(game) = handle.query_snapshot().await.expect("worker is alive") {
                break game;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("startup poll should land within the deadline");

    handle.refresh().await.expect("refresh succeeds");
    let after = handle
        .query_snapshot()
        .await
        .expect("worker is alive")
        .expect("snapshot present");

    assert!(after.tick > before.tick);

    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn configured_display_names_reach_published_snapshots() {
    let mut config = fast_config();
    config
        .player_names
        .insert("ada".to_string(), "Ada of the Outer Rim".to_string());

    let runtime = Runtime::start(config, Box::new(SimulatedSource::demo()));
    let mut events = runtime.handle().subscribe_events();

    let game = next_snapshot(&mut events).await;
    let ada = game
        .players()
        .iter()
        .find(|p| p.alias == "ada")
        .expect("ada is in the demo roster");
    assert_eq!(ada.display_name(), "Ada of the Outer Rim");

    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn invalid_snapshots_surface_as_source_failures() {
    struct BrokenSource;

    #[async_trait::async_trait]
    impl runtime::GameSource for BrokenSource {
        async fn fetch(&self) -> runtime::Result<Game> {
            // Zero production rate fails Game::validate.
            let mut game = Game::new(9, "Ghost Game", 0);
            game.insert_player(Player::new("ada"));
            Ok(game)
        }
    }

    let runtime = Runtime::start(fast_config(), Box::new(BrokenSource));
    let handle = runtime.handle();
    let mut events = handle.subscribe_events();

    let reason = timeout(Duration::from_secs(5), async {
        loop {
            match events.recv().await.expect("event stream stays open") {
                GameEvent::SourceFailed { reason } => break reason,
                _ => continue,
            }
        }
    })
    .await
    .expect("failure should be published within the deadline");

    assert!(reason.contains("production rate"));
    assert!(
        handle
            .query_snapshot()
            .await
            .expect("worker is alive")
            .is_none(),
        "rejected snapshots are never accepted"
    );

    runtime.shutdown().await.expect("clean shutdown");
}
