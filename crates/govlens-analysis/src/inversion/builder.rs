//! Inversion builder — turns "contract C references address A under key K"
//! into "A holds role K on C".

use govlens_core::config::InversionConfig;
use govlens_core::snapshot::{ContractRecord, Snapshot};
use govlens_core::tracing::fields::INVERSION_BUILD;
use govlens_core::types::{Address, FxHashMap, Value};

use super::types::{InversionGraph, Role};

/// Options controlling which addresses receive entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InversionOptions {
    /// Give entries to addresses that are neither a contract nor a known EOA.
    pub include_unknown_addresses: bool,
}

impl From<&InversionConfig> for InversionOptions {
    fn from(config: &InversionConfig) -> Self {
        Self {
            include_unknown_addresses: config.effective_include_unknown_addresses(),
        }
    }
}

/// Builds an [`InversionGraph`] from one snapshot.
pub struct InversionBuilder<'a> {
    snapshot: &'a Snapshot,
    options: InversionOptions,
    skipped: usize,
}

impl<'a> InversionBuilder<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            options: InversionOptions::default(),
            skipped: 0,
        }
    }

    pub fn with_options(mut self, options: InversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(mut self) -> InversionGraph {
        let snapshot = self.snapshot;
        let _span = tracing::debug_span!(INVERSION_BUILD, project = %snapshot.name).entered();
        let mut contracts: Vec<&ContractRecord> = snapshot.contracts.iter().collect();
        contracts.sort_by(|a, b| a.name.cmp(&b.name));

        let mut graph = InversionGraph::default();

        // An address listed twice takes the name of its first record in
        // snapshot order, matching registry lookups.
        let mut first_names: FxHashMap<Address, &str> = FxHashMap::default();
        for contract in &snapshot.contracts {
            first_names
                .entry(contract.address)
                .or_insert(contract.name.as_str());
        }

        // Seed every contract so references to a contract processed later
        // still land on an entry that carries its name.
        for contract in &contracts {
            let name = first_names
                .get(&contract.address)
                .map_or(contract.name.as_str(), |name| *name);
            graph.entry_or_insert(contract.address, Some(name.to_string()));
        }

        for contract in &contracts {
            for (key, value) in contract.upgradeability.fields() {
                self.record(&mut graph, contract, key, &value);
            }
            for (key, value) in &contract.values {
                self.record(&mut graph, contract, key, value);
            }
        }

        tracing::debug!(
            project = %snapshot.name,
            contracts = contracts.len(),
            entries = graph.len(),
            skipped = self.skipped,
            "inversion built"
        );
        graph
    }

    fn record(
        &mut self,
        graph: &mut InversionGraph,
        contract: &ContractRecord,
        key: &str,
        value: &Value,
    ) {
        for address in value.addresses() {
            if !self.admits(graph, address) {
                self.skipped += 1;
                tracing::debug!(
                    %address,
                    role = key,
                    at = %contract.name,
                    "skipping reference to unknown address"
                );
                continue;
            }
            tracing::trace!(%address, role = key, at = %contract.name, "role");
            graph.entry_or_insert(address, None).roles.push(Role {
                name: key.to_string(),
                at_name: contract.name.clone(),
                at_address: contract.address,
            });
        }
    }

    fn admits(&self, graph: &InversionGraph, address: Address) -> bool {
        graph.contains(address)
            || self.snapshot.is_eoa(address)
            || self.options.include_unknown_addresses
    }
}

/// Invert the snapshot with default options.
pub fn invert(snapshot: &Snapshot) -> InversionGraph {
    InversionBuilder::new(snapshot).build()
}

/// Invert the snapshot with explicit options.
pub fn invert_with(snapshot: &Snapshot, options: InversionOptions) -> InversionGraph {
    InversionBuilder::new(snapshot).with_options(options).build()
}
