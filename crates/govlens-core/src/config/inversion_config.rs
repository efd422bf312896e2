//! Role inversion configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InversionConfig {
    /// Record roles held by addresses that are neither a discovered contract
    /// nor a known EOA. Default: false.
    pub include_unknown_addresses: Option<bool>,
}

impl InversionConfig {
    /// Returns the effective switch, defaulting to false.
    pub fn effective_include_unknown_addresses(&self) -> bool {
        self.include_unknown_addresses.unwrap_or(false)
    }
}
