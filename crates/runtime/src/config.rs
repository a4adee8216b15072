//! Runtime configuration and environment loading.
use std::collections::HashMap;
use std::env;
use std::time::Duration;

/// Configuration for the snapshot runtime.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// How often the worker polls the source.
    pub poll_interval: Duration,
    /// Broadcast channel capacity for [`crate::GameEvent`]s.
    pub event_capacity: usize,
    /// Buffer size of the handle-to-worker command channel.
    pub command_buffer: usize,
    /// Display names applied to fetched players, keyed by alias.
    pub player_names: HashMap<String, String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
            event_capacity: 100,
            command_buffer: 10,
            player_names: HashMap::new(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DASHBOARD_POLL_INTERVAL_SECS` - Poll interval in seconds (default: 30)
    /// - `DASHBOARD_EVENT_CAPACITY` - Event channel capacity (default: 100)
    /// - `DASHBOARD_COMMAND_BUFFER` - Command queue size (default: 10)
    /// - `DASHBOARD_PLAYER_NAMES` - Display names, `alias=Name` pairs
    ///   separated by commas
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(secs) = read_env::<u64>("DASHBOARD_POLL_INTERVAL_SECS") {
            config.poll_interval = Duration::from_secs(secs.max(1));
        }
        if let Some(capacity) = read_env::<usize>("DASHBOARD_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }
        if let Some(buffer) = read_env::<usize>("DASHBOARD_COMMAND_BUFFER") {
            config.command_buffer = buffer.max(1);
        }
        if let Ok(raw) = env::var("DASHBOARD_PLAYER_NAMES") {
            config.player_names = parse_name_overrides(&raw);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Parses `alias=Name,other=Other Name` pairs; malformed entries are skipped.
fn parse_name_overrides(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .filter_map(|pair| {
            let (alias, name) = pair.split_once('=')?;
            let alias = alias.trim();
            let name = name.trim();
            if alias.is_empty() || name.is_empty() {
                return None;
            }
            Some((alias.to_string(), name.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_override_pairs() {
        let names = parse_name_overrides("vex=Vexing Vera, talon=Old Talon");
        assert_eq!(names.get("vex").map(String::as_str), Some("Vexing Vera"));
        assert_eq!(names.get("talon").map(String::as_str), Some("Old Talon"));
    }

    #[test]
    fn skips_malformed_override_entries() {
        let names = parse_name_overrides("novalue,=anon,ok=Fine");
        assert_eq!(names.len(), 1);
        assert_eq!(names.get("ok").map(String::as_str), Some("Fine"));
    }
}
