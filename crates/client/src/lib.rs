//! Client container assembling the runtime and a frontend.
pub mod builder;
pub mod config;

use anyhow::Result;
use runtime::Runtime;

pub use builder::ClientBuilder;
pub use client_frontend_core::Frontend;
pub use config::SourceConfig;

/// A fully wired dashboard client.
///
/// Owns the snapshot runtime and one frontend; `run` blocks until the
/// frontend exits, then shuts the runtime down.
pub struct Client {
    pub(crate) runtime: Runtime,
    pub(crate) frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn run(mut self) -> Result<()> {
        let handle = self.runtime.handle();
        let result = self.frontend.run(handle).await;

        if let Err(err) = self.runtime.shutdown().await {
            tracing::warn!("runtime shutdown reported an error: {err}");
        }

        result
    }
}
