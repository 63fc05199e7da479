//! Rules configuration loader.

use std::path::Path;

use delve_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for crawler rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rules from a TOML file.
    ///
    /// Missing sections fall back to [`RulesConfig::default`].
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse rules from TOML text.
    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        Ok(config)
    }
}
