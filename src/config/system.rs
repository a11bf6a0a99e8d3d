//! Root configuration structure (std only).

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::pattern::PatternConfig;
use super::timing::{HomingConfig, PowerConfig};

/// Maximum number of patterns in a configuration file.
pub const MAX_CONFIG_PATTERNS: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlotterConfig {
    /// Homing sequence parameters.
    #[serde(default)]
    pub homing: HomingConfig,

    /// Power controller parameters.
    #[serde(default)]
    pub power: PowerConfig,

    /// Named pattern tables.
    #[serde(default)]
    pub patterns: FnvIndexMap<String<32>, PatternConfig, MAX_CONFIG_PATTERNS>,
}

impl PlotterConfig {
    /// Get a pattern configuration by name.
    pub fn pattern(&self, name: &str) -> Option<&PatternConfig> {
        self.patterns
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all pattern names.
    pub fn pattern_names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(|s| s.as_str())
    }
}
