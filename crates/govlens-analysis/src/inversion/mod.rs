//! Relationship inversion — for every address, which contracts reference it
//! and under which key.
//!
//! Contracts are processed in stable name order; within a contract, upgrade
//! parameters come before captured values, which are visited in key order.
//! The resulting graph is total over contracts and deterministic.

pub mod builder;
pub mod types;

pub use builder::{invert, invert_with, InversionBuilder, InversionOptions};
pub use types::{InversionGraph, InvertedAddress, Role};
