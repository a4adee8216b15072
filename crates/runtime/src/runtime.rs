//! Runtime lifecycle: spawning and stopping the snapshot worker.
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::handle::RuntimeHandle;
use crate::source::GameSource;
use crate::worker::Worker;

/// A running snapshot-acquisition loop.
pub struct Runtime {
    handle: RuntimeHandle,
    worker: JoinHandle<()>,
}

impl Runtime {
    /// Spawns the worker on the current tokio runtime and returns a handle
    /// owner. The first poll happens immediately, then every
    /// `config.poll_interval`.
    pub fn start(config: RuntimeConfig, source: Box<dyn GameSource>) -> Self {
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
        let (event_tx, _) = broadcast::channel(config.event_capacity);

        let worker = Worker::new(source, config, command_rx, event_tx.clone());
        let task = tokio::spawn(worker.run());

        tracing::info!("snapshot runtime started");

        Self {
            handle: RuntimeHandle::new(command_tx, event_tx),
            worker: task,
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stops the worker and waits for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        // Already-stopped workers report ChannelClosed; that is fine here.
        let _ = self.handle.shutdown().await;
        self.worker
            .await
            .map_err(|_| crate::error::RuntimeError::ChannelClosed)
    }
}
