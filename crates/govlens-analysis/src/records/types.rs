//! Descriptive record types, serialized in the shape report pages consume.

use govlens_core::types::{Address, Upgradeability};
use serde::{Serialize, Serializer};

use crate::classifier::PermissionedAccount;

/// A link shown next to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub text: String,
    pub href: String,
}

impl Reference {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pausable {
    pub pausable_by: Vec<String>,
    pub paused: bool,
}

/// Caller-supplied fields layered over a discovered contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractDetailsOptions {
    pub description: Option<String>,
    pub upgradable_by: Option<Vec<String>>,
    pub upgrade_delay: Option<String>,
    pub pausable: Option<Pausable>,
    pub references: Option<Vec<Reference>>,
}

impl ContractDetailsOptions {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// `top` wins wherever it sets a field.
    pub fn overlaid_with(self, top: &ContractDetailsOptions) -> Self {
        Self {
            description: top.description.clone().or(self.description),
            upgradable_by: top.upgradable_by.clone().or(self.upgradable_by),
            upgrade_delay: top.upgrade_delay.clone().or(self.upgrade_delay),
            pausable: top.pausable.clone().or(self.pausable),
            references: top.references.clone().or(self.references),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDetails {
    pub name: String,
    pub address: Address,
    pub upgradeability: Upgradeability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgradable_by: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pausable: Option<Pausable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}

/// Tokens held by an escrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokens {
    /// Every token the escrow receives; serialized as `"*"`.
    All,
    List(Vec<String>),
}

impl Serialize for Tokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("*"),
            Self::List(tokens) => tokens.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EscrowOptions {
    pub address: Address,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Overrides the discovered deployment timestamp.
    pub since_timestamp: Option<u64>,
    pub tokens: Tokens,
    pub upgradable_by: Option<Vec<String>>,
    pub upgrade_delay: Option<String>,
}

impl EscrowOptions {
    pub fn new(address: Address, tokens: Tokens) -> Self {
        Self {
            address,
            name: None,
            description: None,
            since_timestamp: None,
            tokens,
            upgradable_by: None,
            upgrade_delay: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowContract {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub upgradeability: Upgradeability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgradable_by: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_delay: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowRecord {
    pub address: Address,
    pub new_version: bool,
    pub since_timestamp: u64,
    pub tokens: Tokens,
    pub contract: EscrowContract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionRecord {
    pub name: String,
    pub accounts: Vec<PermissionedAccount>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}
