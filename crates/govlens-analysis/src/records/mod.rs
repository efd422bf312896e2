//! Descriptive records assembled from the registry, the classifier, and
//! rendered templates. Each builder is a method on
//! [`ProjectDiscovery`](crate::discovery::ProjectDiscovery).

pub mod contract;
pub mod delay;
pub mod escrow;
pub mod permission;
pub mod types;

pub use delay::{delay_description, format_duration};
pub use types::*;
