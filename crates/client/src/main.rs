//! Dashboard client binary.
//!
//! Composition root that assembles:
//! 1. Runtime (snapshot acquisition) from a configured source
//! 2. Frontend (terminal UI)
//!
//! Both are built independently and injected into the Client container.
use anyhow::Result;

use client_frontend_cli::{CliConfig, CliFrontend};
use nebula_client::{Client, SourceConfig};
use runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the terminal UI.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();
    let source_config = SourceConfig::from_env()?;

    tracing::info!("Starting dashboard client");
    tracing::info!("Source: {:?}", source_config);
    tracing::info!("Poll interval: {:?}", runtime_config.poll_interval);

    let runtime = Runtime::start(runtime_config, source_config.into_source());
    let frontend = CliFrontend::new(cli_config);

    let client = Client::builder().runtime(runtime).frontend(frontend).build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
