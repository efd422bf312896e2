//! Upgrade mechanisms recognized by discovery.
//!
//! One record type per mechanism kind, tagged by the discovery `type` field.
//! Named parameter access goes through [`Upgradeability::fields`], a single
//! exhaustive match, so adding a kind forces every reader to be revisited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::value::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Upgradeability {
    #[serde(rename = "immutable")]
    Immutable,
    #[serde(rename = "gnosis safe")]
    GnosisSafe(GnosisSafe),
    #[serde(rename = "EIP1967 proxy")]
    Eip1967Proxy(AdminProxy),
    #[serde(rename = "ZeppelinOS proxy")]
    ZeppelinOsProxy(ZeppelinOsProxy),
    #[serde(rename = "resolved delegate proxy")]
    ResolvedDelegateProxy(ResolvedDelegateProxy),
    #[serde(rename = "call implementation proxy")]
    CallImplementationProxy(CallImplementationProxy),
    #[serde(rename = "StarkWare proxy")]
    StarkWareProxy(StarkWareProxy),
    #[serde(rename = "StarkWare diamond")]
    StarkWareDiamond(StarkWareDiamond),
    #[serde(rename = "Arbitrum proxy")]
    ArbitrumProxy(ArbitrumProxy),
    #[serde(rename = "new Arbitrum proxy")]
    NewArbitrumProxy(NewArbitrumProxy),
    #[serde(rename = "EIP2535 diamond proxy")]
    Eip2535DiamondProxy(Eip2535DiamondProxy),
    #[serde(rename = "beacon proxy")]
    BeaconProxy(BeaconProxy),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GnosisSafe {
    pub master_copy: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProxy {
    pub admin: Address,
    pub implementation: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeppelinOsProxy {
    pub admin: Address,
    pub implementation: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDelegateProxy {
    pub address_manager: Address,
    pub implementation: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallImplementationProxy {
    pub implementation: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkWareProxy {
    pub implementation: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_implementation: Option<Address>,
    pub upgrade_delay: u64,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarkWareDiamond {
    pub implementation: Address,
    pub upgrade_delay: u64,
    pub is_final: bool,
    /// Facet name → facet address.
    #[serde(default)]
    pub facets: BTreeMap<String, Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitrumProxy {
    pub admin: Address,
    pub admin_implementation: Address,
    pub user_implementation: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArbitrumProxy {
    pub admin: Address,
    pub implementation: Address,
    pub admin_implementation: Address,
    pub user_implementation: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip2535DiamondProxy {
    pub facets: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconProxy {
    pub beacon: Address,
    pub implementation: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacon_admin: Option<Address>,
}

fn address_list<'a>(addresses: impl IntoIterator<Item = &'a Address>) -> Value {
    Value::Array(addresses.into_iter().copied().map(Value::Address).collect())
}

impl Upgradeability {
    /// The discovery `type` tag of this mechanism.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Immutable => "immutable",
            Self::GnosisSafe(_) => "gnosis safe",
            Self::Eip1967Proxy(_) => "EIP1967 proxy",
            Self::ZeppelinOsProxy(_) => "ZeppelinOS proxy",
            Self::ResolvedDelegateProxy(_) => "resolved delegate proxy",
            Self::CallImplementationProxy(_) => "call implementation proxy",
            Self::StarkWareProxy(_) => "StarkWare proxy",
            Self::StarkWareDiamond(_) => "StarkWare diamond",
            Self::ArbitrumProxy(_) => "Arbitrum proxy",
            Self::NewArbitrumProxy(_) => "new Arbitrum proxy",
            Self::Eip2535DiamondProxy(_) => "EIP2535 diamond proxy",
            Self::BeaconProxy(_) => "beacon proxy",
        }
    }

    /// Returns true for the multi-signature wallet mechanism.
    pub fn is_multisig(&self) -> bool {
        matches!(self, Self::GnosisSafe(_))
    }

    /// Every parameter set on this mechanism, keyed by its discovery field name.
    /// Optional parameters that are unset are omitted.
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        let mut fields: Vec<(&'static str, Value)> = Vec::new();
        match self {
            Self::Immutable => {}
            Self::GnosisSafe(p) => {
                fields.push(("masterCopy", p.master_copy.into()));
            }
            Self::Eip1967Proxy(p) => {
                fields.push(("admin", p.admin.into()));
                fields.push(("implementation", p.implementation.into()));
            }
            Self::ZeppelinOsProxy(p) => {
                fields.push(("admin", p.admin.into()));
                fields.push(("implementation", p.implementation.into()));
                if let Some(owner) = p.owner {
                    fields.push(("owner", owner.into()));
                }
            }
            Self::ResolvedDelegateProxy(p) => {
                fields.push(("addressManager", p.address_manager.into()));
                fields.push(("implementation", p.implementation.into()));
            }
            Self::CallImplementationProxy(p) => {
                fields.push(("implementation", p.implementation.into()));
            }
            Self::StarkWareProxy(p) => {
                fields.push(("implementation", p.implementation.into()));
                if let Some(call) = p.call_implementation {
                    fields.push(("callImplementation", call.into()));
                }
                fields.push(("upgradeDelay", p.upgrade_delay.into()));
                fields.push(("isFinal", p.is_final.into()));
            }
            Self::StarkWareDiamond(p) => {
                fields.push(("implementation", p.implementation.into()));
                fields.push(("upgradeDelay", p.upgrade_delay.into()));
                fields.push(("isFinal", p.is_final.into()));
                fields.push(("facets", address_list(p.facets.values())));
            }
            Self::ArbitrumProxy(p) => {
                fields.push(("admin", p.admin.into()));
                fields.push(("adminImplementation", p.admin_implementation.into()));
                fields.push(("userImplementation", p.user_implementation.into()));
            }
            Self::NewArbitrumProxy(p) => {
                fields.push(("admin", p.admin.into()));
                fields.push(("implementation", p.implementation.into()));
                fields.push(("adminImplementation", p.admin_implementation.into()));
                fields.push(("userImplementation", p.user_implementation.into()));
            }
            Self::Eip2535DiamondProxy(p) => {
                fields.push(("facets", address_list(&p.facets)));
            }
            Self::BeaconProxy(p) => {
                fields.push(("beacon", p.beacon.into()));
                fields.push(("implementation", p.implementation.into()));
                if let Some(admin) = p.beacon_admin {
                    fields.push(("beaconAdmin", admin.into()));
                }
            }
        }
        fields
    }

    /// Look up one parameter by its discovery field name. `type` yields the
    /// mechanism tag.
    pub fn param(&self, key: &str) -> Option<Value> {
        if key == "type" {
            return Some(Value::String(self.kind().to_string()));
        }
        self.fields()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Addresses of the code this mechanism delegates to.
    pub fn implementations(&self) -> Vec<Address> {
        match self {
            Self::Immutable => Vec::new(),
            Self::GnosisSafe(p) => vec![p.master_copy],
            Self::Eip1967Proxy(p) => vec![p.implementation],
            Self::ZeppelinOsProxy(p) => vec![p.implementation],
            Self::ResolvedDelegateProxy(p) => vec![p.implementation],
            Self::CallImplementationProxy(p) => vec![p.implementation],
            Self::StarkWareProxy(p) => std::iter::once(p.implementation)
                .chain(p.call_implementation)
                .collect(),
            Self::StarkWareDiamond(p) => std::iter::once(p.implementation)
                .chain(p.facets.values().copied())
                .collect(),
            Self::ArbitrumProxy(p) => vec![p.admin_implementation, p.user_implementation],
            Self::NewArbitrumProxy(p) => {
                vec![p.implementation, p.admin_implementation, p.user_implementation]
            }
            Self::Eip2535DiamondProxy(p) => p.facets.clone(),
            Self::BeaconProxy(p) => vec![p.implementation],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "0x543ba4aadbab8f9025686bd03993043599c6fb04";
    const IMPL: &str = "0xd2e67b6a032f0a9b1f569e63ad6c38f7342c2e00";

    #[test]
    fn test_deserialize_tagged_proxy() {
        let json = format!(
            r#"{{"type": "EIP1967 proxy", "admin": "{ADMIN}", "implementation": "{IMPL}"}}"#
        );
        let upgradeability: Upgradeability = serde_json::from_str(&json).unwrap();
        assert_eq!(upgradeability.kind(), "EIP1967 proxy");
        assert_eq!(
            upgradeability.param("admin"),
            Some(Value::Address(ADMIN.parse().unwrap()))
        );
        assert_eq!(upgradeability.param("owner"), None);
        assert_eq!(upgradeability.implementations(), vec![IMPL.parse().unwrap()]);
    }

    #[test]
    fn test_immutable_has_no_params() {
        let upgradeability: Upgradeability =
            serde_json::from_str(r#"{"type": "immutable"}"#).unwrap();
        assert!(upgradeability.fields().is_empty());
        assert!(upgradeability.implementations().is_empty());
        assert_eq!(
            upgradeability.param("type"),
            Some(Value::String("immutable".to_string()))
        );
        assert!(!upgradeability.is_multisig());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<Upgradeability>(r#"{"type": "mystery proxy"}"#).is_err());
    }

    #[test]
    fn test_starkware_params_include_numbers() {
        let json = format!(
            r#"{{"type": "StarkWare proxy", "implementation": "{IMPL}", "upgradeDelay": 691200, "isFinal": false}}"#
        );
        let upgradeability: Upgradeability = serde_json::from_str(&json).unwrap();
        assert_eq!(upgradeability.param("upgradeDelay"), Some(Value::from(691_200u64)));
        assert_eq!(upgradeability.param("callImplementation"), None);
    }
}
