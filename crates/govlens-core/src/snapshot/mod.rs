//! Immutable in-memory model of one discovery run.
//!
//! Data only. Indexing, lookups and derived views live in `govlens-analysis`
//! and borrow from a [`Snapshot`]; they never outlive it.

pub mod contract;

pub use contract::ContractRecord;

use serde::{Deserialize, Serialize};

use crate::types::{Address, FxHashSet};

/// One capture of discovered contracts and accounts for a single project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Project identifier the snapshot was captured for.
    #[serde(default)]
    pub name: String,
    /// Chain the snapshot was captured on.
    #[serde(default)]
    pub chain: String,
    /// Block the snapshot was captured at, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    pub contracts: Vec<ContractRecord>,
    /// Addresses known to carry no code.
    #[serde(default)]
    pub eoas: FxHashSet<Address>,
}

impl Snapshot {
    pub fn new(
        name: impl Into<String>,
        contracts: Vec<ContractRecord>,
        eoas: impl IntoIterator<Item = Address>,
    ) -> Self {
        Self {
            name: name.into(),
            chain: String::new(),
            block_number: None,
            contracts,
            eoas: eoas.into_iter().collect(),
        }
    }

    /// Parse a discovery document. `origin` labels errors (usually a path).
    pub fn from_json(json: &str, origin: &str) -> Result<Self, crate::errors::SnapshotError> {
        serde_json::from_str(json).map_err(|e| crate::errors::SnapshotError::Malformed {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn is_eoa(&self, address: Address) -> bool {
        self.eoas.contains(&address)
    }
}
