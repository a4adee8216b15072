//! CLI-specific configuration.
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct CliConfig {
    /// How often the loop polls the keyboard between runtime events.
    pub frame_interval: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(50),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Input poll interval in milliseconds (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = env::var("CLI_FRAME_INTERVAL_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
        {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }

        config
    }
}
