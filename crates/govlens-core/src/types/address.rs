//! Canonical 20-byte chain account address.
//!
//! Parsing accepts `0x` followed by exactly 40 hex digits in any letter case.
//! Equality, hashing and ordering are defined on the raw bytes, so two
//! spellings of the same account compare equal. Display is lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AddressError;

/// Number of bytes in an account address.
pub const ADDRESS_LEN: usize = 20;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Construct from raw bytes.
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns true if `input` has address syntax (`0x` + 40 hex digits).
    pub fn is_address_syntax(input: &str) -> bool {
        input.parse::<Address>().is_ok()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let hex = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .ok_or_else(|| AddressError::MissingPrefix {
                input: input.to_string(),
            })?;

        if hex.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidLength {
                input: input.to_string(),
                digits: hex.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        for (i, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
            match (decode_nibble(pair[0]), decode_nibble(pair[1])) {
                (Some(hi), Some(lo)) => bytes[i] = (hi << 4) | lo,
                _ => {
                    return Err(AddressError::InvalidHex {
                        input: input.to_string(),
                    })
                }
            }
        }
        Ok(Self(bytes))
    }
}

fn decode_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
