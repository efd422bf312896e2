//! Typed contract state values captured by discovery.
//!
//! Discovery emits loosely typed JSON. At load time every string with
//! address syntax becomes [`Value::Address`]; everything else keeps its
//! JSON shape. `null` has no representation and fails the load.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::address::Address;

/// A single named state value of a discovered contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Address(Address),
    Number(serde_json::Number),
    String(String),
    Bool(bool),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

/// The shape of a [`Value`], used for type checks and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    Address,
    Number,
    String,
    Bool,
    Array,
    Object,
}

impl ValueShape {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Number => "number",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn shape(&self) -> ValueShape {
        match self {
            Self::Address(_) => ValueShape::Address,
            Self::Number(_) => ValueShape::Number,
            Self::String(_) => ValueShape::String,
            Self::Bool(_) => ValueShape::Bool,
            Self::Array(_) => ValueShape::Array,
            Self::Object(_) => ValueShape::Object,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            Self::Address(address) => Some(*address),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Every address held by this value, descending through arrays.
    /// Objects are opaque: their members are not reported.
    pub fn addresses(&self) -> Vec<Address> {
        let mut found = Vec::new();
        collect_addresses(self, &mut found);
        found
    }
}

fn collect_addresses(value: &Value, found: &mut Vec<Address>) {
    match value {
        Value::Address(address) => found.push(*address),
        Value::Array(items) => {
            for item in items {
                collect_addresses(item, found);
            }
        }
        _ => {}
    }
}

impl From<Address> for Value {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = String;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => return Err("null is not a valid contract value".to_string()),
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => match s.parse::<Address>() {
                Ok(address) => Self::Address(address),
                Err(_) => Self::String(s),
            },
            serde_json::Value::Array(items) => Self::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Address(address) => serde_json::Value::String(address.to_string()),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}
