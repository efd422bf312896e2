//! Inversion graph types.

use govlens_core::types::{Address, FxHashMap};
use serde::Serialize;
use smallvec::SmallVec;

/// One reference to an address: "referenced under `name` on contract
/// `at_name` at `at_address`".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// The value key or upgrade parameter holding the reference.
    pub name: String,
    /// Name of the contract holding the reference.
    pub at_name: String,
    /// Address of the contract holding the reference.
    pub at_address: Address,
}

/// Everything known about one address after inversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvertedAddress {
    pub address: Address,
    /// Contract name, when the address is a discovered contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Roles in discovery order. SmallVec: most addresses hold a handful.
    pub roles: SmallVec<[Role; 4]>,
}

impl InvertedAddress {
    pub fn new(address: Address, name: Option<String>) -> Self {
        Self {
            address,
            name,
            roles: SmallVec::new(),
        }
    }

    /// Contract name, else the lowercase address.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.address.to_string(),
        }
    }

    /// Roles with the given role name.
    pub fn roles_named<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a Role> + 'a {
        self.roles.iter().filter(move |r| r.name == role)
    }

    pub fn has_role(&self, role: &str, at_name: &str) -> bool {
        self.roles
            .iter()
            .any(|r| r.name == role && r.at_name == at_name)
    }
}

/// Address → inverted entry, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InversionGraph {
    pub(crate) entries: Vec<InvertedAddress>,
    pub(crate) index: FxHashMap<Address, usize>,
}

impl InversionGraph {
    pub fn get(&self, address: Address) -> Option<&InvertedAddress> {
        self.index.get(&address).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, address: Address) -> bool {
        self.index.contains_key(&address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InvertedAddress> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the contracts on which `subject` holds `role`, in role order.
    pub fn forward(&self, subject: Address, role: &str) -> Vec<String> {
        self.get(subject)
            .map(|entry| entry.roles_named(role).map(|r| r.at_name.clone()).collect())
            .unwrap_or_default()
    }

    /// Display names of every entry holding `role` on the contract named
    /// `at_name`, in graph order. Each entry appears at most once.
    pub fn reverse(&self, role: &str, at_name: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.has_role(role, at_name))
            .map(InvertedAddress::display_name)
            .collect()
    }

    /// Entry for `address`, created with `name` when absent.
    pub(crate) fn entry_or_insert(
        &mut self,
        address: Address,
        name: Option<String>,
    ) -> &mut InvertedAddress {
        let position = match self.index.get(&address) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(address, position);
                self.entries.push(InvertedAddress::new(address, name));
                position
            }
        };
        &mut self.entries[position]
    }
}

impl<'a> IntoIterator for &'a InversionGraph {
    type Item = &'a InvertedAddress;
    type IntoIter = std::slice::Iter<'a, InvertedAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
