//! Contract registry — resolves an address or unique name to its record.
//!
//! The registry owns the snapshot and holds index positions into its
//! contract list. Name lookups never pick among duplicates.

use std::collections::hash_map::Entry;

use govlens_core::errors::RegistryError;
use govlens_core::snapshot::{ContractRecord, Snapshot};
use govlens_core::types::{Address, FxHashMap};
use smallvec::SmallVec;

pub struct ContractRegistry {
    snapshot: Snapshot,
    by_address: FxHashMap<Address, usize>,
    /// Name → positions. SmallVec: a well-formed snapshot has one per name.
    by_name: FxHashMap<String, SmallVec<[usize; 1]>>,
}

impl ContractRegistry {
    pub fn new(snapshot: Snapshot) -> Self {
        let mut by_address: FxHashMap<Address, usize> = FxHashMap::default();
        let mut by_name: FxHashMap<String, SmallVec<[usize; 1]>> = FxHashMap::default();

        for (position, contract) in snapshot.contracts.iter().enumerate() {
            match by_address.entry(contract.address) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(_) => tracing::warn!(
                    project = %snapshot.name,
                    address = %contract.address,
                    name = %contract.name,
                    "address listed twice in snapshot, first record wins"
                ),
            }
            by_name
                .entry(contract.name.clone())
                .or_default()
                .push(position);
        }

        Self {
            snapshot,
            by_address,
            by_name,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn project(&self) -> &str {
        &self.snapshot.name
    }

    pub fn contracts(&self) -> &[ContractRecord] {
        &self.snapshot.contracts
    }

    /// Resolve an identifier that is either an address or a contract name.
    ///
    /// Anything with address syntax is looked up by address only; a name
    /// that happens to look like an address is never consulted.
    pub fn resolve(&self, identifier: &str) -> Result<&ContractRecord, RegistryError> {
        match identifier.parse::<Address>() {
            Ok(address) => self.by_address(address),
            Err(_) => self.by_name(identifier),
        }
    }

    pub fn by_address(&self, address: Address) -> Result<&ContractRecord, RegistryError> {
        self.get(address).ok_or_else(|| RegistryError::NotFound {
            identifier: address.to_string(),
            project: self.project().to_string(),
        })
    }

    pub fn by_name(&self, name: &str) -> Result<&ContractRecord, RegistryError> {
        match self.by_name.get(name).map(|positions| positions.as_slice()) {
            Some([position]) => Ok(&self.snapshot.contracts[*position]),
            Some(positions) if positions.len() > 1 => {
                tracing::warn!(
                    project = %self.snapshot.name,
                    name,
                    count = positions.len(),
                    "ambiguous contract name"
                );
                Err(RegistryError::AmbiguousName {
                    name: name.to_string(),
                    count: positions.len(),
                    project: self.project().to_string(),
                })
            }
            _ => Err(RegistryError::NotFound {
                identifier: name.to_string(),
                project: self.project().to_string(),
            }),
        }
    }

    pub fn get(&self, address: Address) -> Option<&ContractRecord> {
        self.by_address
            .get(&address)
            .map(|&position| &self.snapshot.contracts[position])
    }

    pub fn contains(&self, address: Address) -> bool {
        self.by_address.contains_key(&address)
    }

    /// Every contract address followed by the implementation addresses of
    /// its upgrade mechanism, in snapshot order.
    pub fn all_contract_addresses(&self) -> Vec<Address> {
        self.snapshot
            .contracts
            .iter()
            .flat_map(|contract| {
                std::iter::once(contract.address)
                    .chain(contract.upgradeability.implementations())
            })
            .collect()
    }
}
