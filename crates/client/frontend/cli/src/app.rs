//! Glue code tying the runtime handle and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::Frontend;
use runtime::RuntimeHandle;

use crate::config::CliConfig;
use crate::event_loop::EventLoop;
use crate::presentation::terminal;

/// Terminal frontend rendering the dashboard until the user quits.
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        tracing::info!("CLI frontend starting");
        let result = EventLoop::new(handle, self.config.clone())
            .run(&mut terminal)
            .await;
        tracing::info!("CLI frontend stopped");

        result
    }
}
