//! Configuration system for govlens.
//! TOML-based, 3-layer resolution: overrides > env > project file > defaults.

pub mod discovery_config;
pub mod govlens_config;
pub mod inversion_config;

pub use discovery_config::DiscoveryConfig;
pub use govlens_config::{ConfigOverrides, GovlensConfig};
pub use inversion_config::InversionConfig;
