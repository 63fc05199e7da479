//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for the combat driver.
///
/// Command line flags take precedence over these values.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `crawlers.ron` and optionally `rules.toml`.
    pub data_dir: PathBuf,
    /// Upper bound on exchanges in a duel before it is called a draw.
    pub max_rounds: u32,
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_MAX_ROUNDS: u32 = 100;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DELVE_DATA_DIR` - Content directory (default: `data`)
    /// - `DELVE_MAX_ROUNDS` - Duel round limit (default: 100, minimum 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("DELVE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(rounds) = read_var::<u32, _>(&lookup, "DELVE_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
        }
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
