//! Project discovery facade — one snapshot, its registry, and a lazily
//! built inversion graph. Record builders live in `crate::records`.

use std::cell::OnceCell;

use govlens_core::config::GovlensConfig;
use govlens_core::errors::AnalysisError;
use govlens_core::snapshot::{ContractRecord, Snapshot};
use govlens_core::source::{FsSnapshotSource, SnapshotSource};
use govlens_core::types::Address;

use crate::classifier::AccountClassifier;
use crate::inversion::{InversionBuilder, InversionGraph, InversionOptions};
use crate::registry::ContractRegistry;
use crate::values::ValueAccessor;

pub struct ProjectDiscovery {
    registry: ContractRegistry,
    options: InversionOptions,
    inversion: OnceCell<InversionGraph>,
}

impl ProjectDiscovery {
    pub fn new(snapshot: Snapshot) -> Self {
        Self::with_options(snapshot, InversionOptions::default())
    }

    pub fn with_options(snapshot: Snapshot, options: InversionOptions) -> Self {
        Self {
            registry: ContractRegistry::new(snapshot),
            options,
            inversion: OnceCell::new(),
        }
    }

    /// Load `project` from `source`, taking inversion options from `config`.
    pub fn load(
        source: &dyn SnapshotSource,
        project: &str,
        config: &GovlensConfig,
    ) -> Result<Self, AnalysisError> {
        let snapshot = source.load(project)?;
        tracing::info!(
            project,
            contracts = snapshot.contracts.len(),
            eoas = snapshot.eoas.len(),
            "project discovery loaded"
        );
        Ok(Self::with_options(
            snapshot,
            InversionOptions::from(&config.inversion),
        ))
    }

    /// Load `project` from the discovery directory named in `config`.
    pub fn from_config(project: &str, config: &GovlensConfig) -> Result<Self, AnalysisError> {
        let source = FsSnapshotSource::from_config(&config.discovery);
        Self::load(&source, project, config)
    }

    pub fn project_name(&self) -> &str {
        self.registry.project()
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    pub fn values(&self) -> ValueAccessor<'_> {
        ValueAccessor::new(&self.registry)
    }

    pub fn classifier(&self) -> AccountClassifier<'_> {
        AccountClassifier::new(&self.registry)
    }

    /// The inversion graph, built on first use.
    pub fn inversion(&self) -> &InversionGraph {
        self.inversion.get_or_init(|| {
            InversionBuilder::new(self.registry.snapshot())
                .with_options(self.options)
                .build()
        })
    }

    pub fn contract(&self, identifier: &str) -> Result<&ContractRecord, AnalysisError> {
        Ok(self.registry.resolve(identifier)?)
    }

    pub fn all_contract_addresses(&self) -> Vec<Address> {
        self.registry.all_contract_addresses()
    }
}
