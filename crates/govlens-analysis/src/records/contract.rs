//! Contract detail records.

use govlens_core::constants::LIST_SEPARATOR;
use govlens_core::errors::AnalysisError;
use govlens_core::snapshot::ContractRecord;
use govlens_core::types::FxHashMap;

use super::types::{ContractDetails, ContractDetailsOptions, Pausable};
use crate::discovery::ProjectDiscovery;
use crate::template::format_positional;
use crate::template::opstack::CONTRACT_DESCRIPTIONS;

impl ProjectDiscovery {
    /// Details of the contract `identifier` with `options` layered on top.
    /// When `options.pausable` is set, the pause sentences are appended to
    /// the description.
    pub fn contract_details(
        &self,
        identifier: &str,
        options: ContractDetailsOptions,
    ) -> Result<ContractDetails, AnalysisError> {
        let contract = self.contract(identifier)?;
        Ok(details(contract, options))
    }

    /// Details of the contract whose address is held in `key` on `contract_id`.
    pub fn contract_from_value(
        &self,
        contract_id: &str,
        key: &str,
        options: ContractDetailsOptions,
    ) -> Result<ContractDetails, AnalysisError> {
        let address = self.values().address_value(contract_id, key)?;
        let contract = self.registry().by_address(address)?;
        Ok(details(contract, options))
    }

    /// Details of the contract named by upgrade parameter `key` of `contract_id`.
    pub fn contract_from_upgradeability(
        &self,
        contract_id: &str,
        key: &str,
    ) -> Result<ContractDetails, AnalysisError> {
        let address = self.values().upgrade_param_address(contract_id, key)?;
        let contract = self.registry().by_address(address)?;
        Ok(details(contract, ContractDetailsOptions::default()))
    }

    /// The standard OP stack contracts with their stock descriptions.
    ///
    /// `overrides` maps a stock contract name to the name used by this
    /// project; the description's `{0}` is the effective name. Fields set in
    /// `upgrades` win over the stock description.
    pub fn opstack_contract_details(
        &self,
        upgrades: &ContractDetailsOptions,
        overrides: &FxHashMap<String, String>,
    ) -> Result<Vec<ContractDetails>, AnalysisError> {
        CONTRACT_DESCRIPTIONS
            .iter()
            .map(|template| {
                let name = overrides
                    .get(template.name)
                    .map(String::as_str)
                    .unwrap_or(template.name);
                let description = format_positional(template.core_description, &[name])?;
                let options = ContractDetailsOptions::described(description).overlaid_with(upgrades);
                self.contract_details(name, options)
            })
            .collect()
    }
}

fn details(contract: &ContractRecord, options: ContractDetailsOptions) -> ContractDetails {
    let description = match &options.pausable {
        Some(pausable) => Some(pausable_description(options.description.as_deref(), pausable)),
        None => options.description,
    };
    ContractDetails {
        name: contract.name.clone(),
        address: contract.address,
        upgradeability: contract.upgradeability.clone(),
        description,
        upgradable_by: options.upgradable_by,
        upgrade_delay: options.upgrade_delay,
        pausable: options.pausable,
        references: options.references,
    }
}

/// Base description (if any), then who can pause, then whether it is paused.
pub(crate) fn pausable_description(base: Option<&str>, pausable: &Pausable) -> String {
    let pausable_by = format!(
        "The contract is pausable by {}.",
        pausable.pausable_by.join(LIST_SEPARATOR)
    );
    let mut parts: Vec<&str> = base.into_iter().collect();
    parts.push(&pausable_by);
    if pausable.paused {
        parts.push("The contract is currently paused.");
    }
    parts.join(" ")
}
