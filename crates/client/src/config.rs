//! Snapshot source selection from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};
use runtime::{FixtureSource, GameSource, SimulatedSource};

/// Which snapshot source the client should track.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SourceConfig {
    /// The built-in demo game.
    Simulated,
    /// A JSON snapshot file kept up to date by an external process.
    Fixture(PathBuf),
}

impl SourceConfig {
    /// Reads `DASHBOARD_SOURCE`: `simulated` (default when unset) or
    /// `fixture:<path>`.
    pub fn from_env() -> Result<Self> {
        match env::var("DASHBOARD_SOURCE") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Self::Simulated),
        }
    }

    pub fn into_source(self) -> Box<dyn GameSource> {
        match self {
            Self::Simulated => Box::new(SimulatedSource::demo()),
            Self::Fixture(path) => Box::new(FixtureSource::new(path)),
        }
    }
}

impl std::str::FromStr for SourceConfig {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        if raw.eq_ignore_ascii_case("simulated") {
            return Ok(Self::Simulated);
        }
        if let Some(path) = raw.strip_prefix("fixture:") {
            if path.is_empty() {
                bail!("DASHBOARD_SOURCE fixture needs a path, e.g. fixture:/tmp/game.json");
            }
            return Ok(Self::Fixture(PathBuf::from(path)));
        }
        bail!("unknown DASHBOARD_SOURCE value '{raw}' (expected 'simulated' or 'fixture:<path>')")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simulated() {
        let config: SourceConfig = "Simulated".parse().unwrap();
        assert_eq!(config, SourceConfig::Simulated);
    }

    #[test]
    fn parses_fixture_with_path() {
        let config: SourceConfig = "fixture:/tmp/game.json".parse().unwrap();
        assert_eq!(config, SourceConfig::Fixture(PathBuf::from("/tmp/game.json")));
    }

    #[test]
    fn rejects_fixture_without_path() {
        assert!("fixture:".parse::<SourceConfig>().is_err());
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("http".parse::<SourceConfig>().is_err());
    }
}
