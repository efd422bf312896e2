//! Account classifier — EOA, multisig, or generic contract.
//!
//! An address that is neither a known EOA nor a discovered contract is
//! classified as `Contract`. Missing data is not evidence of an EOA, and
//! downstream description text depends on this default.

use govlens_core::snapshot::ContractRecord;
use govlens_core::types::{Address, Value};
use serde::Serialize;

use crate::registry::ContractRegistry;
use crate::values::ValueAccessor;
use govlens_core::errors::ValueError;

/// Kind of a permissioned account, as shown on report pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountKind {
    #[serde(rename = "EOA")]
    Eoa,
    MultiSig,
    Contract,
}

impl AccountKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eoa => "EOA",
            Self::MultiSig => "MultiSig",
            Self::Contract => "Contract",
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An address annotated with its account kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PermissionedAccount {
    pub address: Address,
    #[serde(rename = "type")]
    pub kind: AccountKind,
}

#[derive(Clone, Copy)]
pub struct AccountClassifier<'a> {
    registry: &'a ContractRegistry,
}

impl<'a> AccountClassifier<'a> {
    pub fn new(registry: &'a ContractRegistry) -> Self {
        Self { registry }
    }

    pub fn classify(&self, address: Address) -> AccountKind {
        if self.registry.snapshot().is_eoa(address) {
            return AccountKind::Eoa;
        }
        match self.registry.get(address) {
            Some(contract) if contract.upgradeability.is_multisig() => AccountKind::MultiSig,
            _ => AccountKind::Contract,
        }
    }

    pub fn account(&self, address: Address) -> PermissionedAccount {
        PermissionedAccount {
            address,
            kind: self.classify(address),
        }
    }

    /// Classify a captured value read from `key` on `contract`.
    /// The value must be an address.
    pub fn permissioned_account(
        &self,
        contract: &ContractRecord,
        key: &str,
        value: &Value,
    ) -> Result<PermissionedAccount, ValueError> {
        let address = ValueAccessor::new(self.registry).expect_address(contract, key, value)?;
        Ok(self.account(address))
    }
}
