//! Discovered contract record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Address, Upgradeability, Value};

/// A contract as captured by discovery. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    /// Expected to be unique within a snapshot; the snapshot cannot enforce it.
    pub name: String,
    pub address: Address,
    pub upgradeability: Upgradeability,
    #[serde(default)]
    pub values: BTreeMap<String, Value>,
    /// Unix timestamp of the contract's deployment, when discovery captured it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since_timestamp: Option<u64>,
}

impl ContractRecord {
    pub fn new(name: impl Into<String>, address: Address, upgradeability: Upgradeability) -> Self {
        Self {
            name: name.into(),
            address,
            upgradeability,
            values: BTreeMap::new(),
            since_timestamp: None,
        }
    }

    /// Builder-style helper for attaching a captured value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn with_since_timestamp(mut self, timestamp: u64) -> Self {
        self.since_timestamp = Some(timestamp);
        self
    }
}
