//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::WeightLimit;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Search behavior
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for path queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default weight limit for path queries; 0 means unlimited
    #[serde(default)]
    pub default_limit: u64,

    /// Cross-check every bidirectional result against single-source Dijkstra
    #[serde(default = "default_verify_with_oracle")]
    pub verify_with_oracle: bool,
}

impl SearchConfig {
    pub fn limit(&self) -> WeightLimit {
        WeightLimit::from_setting(self.default_limit)
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_verify_with_oracle() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            search: SearchConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 0,
            verify_with_oracle: default_verify_with_oracle(),
        }
    }
}
