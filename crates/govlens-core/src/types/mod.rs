//! Value types shared by every govlens subsystem.
//! Addresses, typed state values, and upgrade mechanisms.

pub mod address;
pub mod collections;
pub mod upgradeability;
pub mod value;

pub use address::Address;
pub use collections::{FxHashMap, FxHashSet};
pub use upgradeability::Upgradeability;
pub use value::{Value, ValueShape};
