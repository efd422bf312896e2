//! Permission records: permissioned accounts, multisigs, and the OP stack
//! permission table.

use govlens_core::constants::{SAFE_OWNERS_KEY, SAFE_THRESHOLD_KEY};
use govlens_core::errors::{AnalysisError, RecordError};
use govlens_core::snapshot::ContractRecord;
use govlens_core::types::{Value, ValueShape};

use super::types::{PermissionRecord, Reference};
use crate::classifier::{AccountKind, PermissionedAccount};
use crate::discovery::ProjectDiscovery;
use crate::template::opstack::PERMISSION_TEMPLATES;
use crate::template::TemplateRenderer;
use crate::values::ValueAccessor;

impl ProjectDiscovery {
    /// The address held in `key` on `contract_id`, with its account kind.
    pub fn permissioned_account(
        &self,
        contract_id: &str,
        key: &str,
    ) -> Result<PermissionedAccount, AnalysisError> {
        let contract = self.contract(contract_id)?;
        let value = self.values().value(contract_id, key)?;
        Ok(self.classifier().permissioned_account(contract, key, value)?)
    }

    /// Every address in the array held in `key`. With `index`, the array is
    /// the `index`-th element of that value instead.
    pub fn permissioned_accounts(
        &self,
        contract_id: &str,
        key: &str,
        index: Option<usize>,
    ) -> Result<Vec<PermissionedAccount>, AnalysisError> {
        let contract = self.contract(contract_id)?;
        let values = self.values();
        let mut items = values.array_value(contract_id, key)?;
        let mut label = key.to_string();

        if let Some(index) = index {
            label = format!("{key}[{index}]");
            let nested = items
                .get(index)
                .ok_or_else(|| values.missing(contract, &label))?;
            items = nested
                .as_array()
                .ok_or_else(|| values.mismatch(contract, &label, ValueShape::Array, nested))?;
        }

        self.classify_all(&values, contract, &label, items)
    }

    /// `"T / N"`: signing threshold over owner count.
    pub fn multisig_stats(&self, identifier: &str) -> Result<String, AnalysisError> {
        let values = self.values();
        let threshold = values.number_value(identifier, SAFE_THRESHOLD_KEY)?;
        let owners = values.array_value(identifier, SAFE_OWNERS_KEY)?.len();
        Ok(format!("{threshold} / {owners}"))
    }

    /// The safe itself and its participants, as two records.
    pub fn multisig_permission(
        &self,
        identifier: &str,
        description: &str,
        references: Option<Vec<Reference>>,
    ) -> Result<Vec<PermissionRecord>, AnalysisError> {
        let contract = self.contract(identifier)?;
        if !contract.upgradeability.is_multisig() {
            return Err(RecordError::NotMultisig {
                contract: contract.name.clone(),
                kind: contract.upgradeability.kind().to_string(),
                project: self.project_name().to_string(),
            }
            .into());
        }

        let stats = self.multisig_stats(identifier)?;
        let participants = self.permissioned_accounts(identifier, SAFE_OWNERS_KEY, None)?;

        Ok(vec![
            PermissionRecord {
                name: identifier.to_string(),
                accounts: vec![PermissionedAccount {
                    address: contract.address,
                    kind: AccountKind::MultiSig,
                }],
                description: format!("{description} This is a Gnosis Safe with {stats} threshold."),
                references: None,
            },
            PermissionRecord {
                name: format!("{identifier} participants"),
                accounts: participants,
                description: format!("Those are the participants of the {identifier}."),
                references,
            },
        ])
    }

    /// A contract listed as a permissioned actor.
    pub fn contract_as_permissioned(
        &self,
        contract: &ContractRecord,
        description: &str,
    ) -> PermissionRecord {
        PermissionRecord {
            name: contract.name.clone(),
            accounts: vec![PermissionedAccount {
                address: contract.address,
                kind: AccountKind::Contract,
            }],
            description: description.to_string(),
            references: None,
        }
    }

    /// The OP stack permission table rendered against this project.
    pub fn opstack_permissions(&self) -> Result<Vec<PermissionRecord>, AnalysisError> {
        let renderer = TemplateRenderer::new(self.inversion());
        PERMISSION_TEMPLATES
            .iter()
            .map(|template| {
                let account =
                    self.permissioned_account(template.source.contract, template.source.value)?;
                let description = renderer.render(template, account.address)?;
                Ok::<_, AnalysisError>(PermissionRecord {
                    name: template.name.to_string(),
                    accounts: vec![account],
                    description,
                    references: None,
                })
            })
            .collect()
    }

    fn classify_all(
        &self,
        values: &ValueAccessor<'_>,
        contract: &ContractRecord,
        label: &str,
        items: &[Value],
    ) -> Result<Vec<PermissionedAccount>, AnalysisError> {
        let classifier = self.classifier();
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let address = values.expect_address(contract, &format!("{label}[{i}]"), item)?;
                Ok::<_, AnalysisError>(classifier.account(address))
            })
            .collect()
    }
}
