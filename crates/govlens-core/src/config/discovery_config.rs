//! Discovery snapshot location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHAIN, DEFAULT_DISCOVERY_ROOT};

/// Where discovery snapshots are read from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory containing `<project>/<chain>/discovered.json`. Default: `discovery`.
    pub root: Option<PathBuf>,
    /// Chain whose snapshot is read. Default: `ethereum`.
    pub chain: Option<String>,
}

impl DiscoveryConfig {
    /// Returns the effective snapshot root, defaulting to `discovery`.
    pub fn effective_root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DISCOVERY_ROOT))
    }

    /// Returns the effective chain name, defaulting to `ethereum`.
    pub fn effective_chain(&self) -> &str {
        self.chain.as_deref().unwrap_or(DEFAULT_CHAIN)
    }
}
