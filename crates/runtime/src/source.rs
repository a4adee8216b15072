//! Seam between the runtime and wherever game snapshots come from.
use async_trait::async_trait;

use game_core::Game;

use crate::error::Result;

/// Produces game snapshots on demand.
///
/// The worker calls [`fetch`](Self::fetch) once per poll cycle (and on
/// manual refreshes) and validates the result before publishing it, so
/// implementations only need to deliver whatever the backing service
/// currently reports.
#[async_trait]
pub trait GameSource: Send + Sync {
    async fn fetch(&self) -> Result<Game>;
}
