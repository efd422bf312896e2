//! # govlens-analysis
//!
//! Governance analysis over one discovery snapshot: contract registry,
//! typed value access, account classification, role inversion,
//! description templates, and the descriptive records built from them.

pub mod classifier;
pub mod discovery;
pub mod inversion;
pub mod records;
pub mod registry;
pub mod template;
pub mod values;

pub use classifier::{AccountClassifier, AccountKind, PermissionedAccount};
pub use discovery::ProjectDiscovery;
pub use inversion::{invert, InversionGraph, InversionOptions};
pub use records::{
    ContractDetails, ContractDetailsOptions, EscrowOptions, EscrowRecord, PermissionRecord,
};
pub use registry::ContractRegistry;
pub use values::ValueAccessor;
