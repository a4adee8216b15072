//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the snapshot runtime via [`RuntimeHandle`]:
/// subscribe to events, query the latest snapshot, request refreshes. They
/// do not own the runtime; they receive a handle for communication only.
///
/// Implementations: `CliFrontend` (ratatui + crossterm); a graphical
/// frontend can implement the same trait later.
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
