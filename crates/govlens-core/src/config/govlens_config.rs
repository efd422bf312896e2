//! Top-level govlens configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DiscoveryConfig, InversionConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`GOVLENS_*`)
/// 3. Project config (`govlens.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GovlensConfig {
    pub discovery: DiscoveryConfig,
    pub inversion: InversionConfig,
}

/// Caller-supplied overrides that beat every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub discovery_root: Option<PathBuf>,
    pub chain: Option<String>,
    pub include_unknown_addresses: Option<bool>,
}

impl GovlensConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        tracing::debug!(
            root = %config.discovery.effective_root().display(),
            chain = config.discovery.effective_chain(),
            include_unknown = config.inversion.effective_include_unknown_addresses(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GovlensConfig) -> Result<(), ConfigError> {
        if let Some(chain) = &config.discovery.chain {
            if chain.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "discovery.chain".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(root) = &config.discovery.root {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "discovery.root".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GovlensConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GovlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut GovlensConfig, other: &GovlensConfig) {
        if other.discovery.root.is_some() {
            base.discovery.root = other.discovery.root.clone();
        }
        if other.discovery.chain.is_some() {
            base.discovery.chain = other.discovery.chain.clone();
        }
        if other.inversion.include_unknown_addresses.is_some() {
            base.inversion.include_unknown_addresses = other.inversion.include_unknown_addresses;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GOVLENS_DISCOVERY_ROOT`, `GOVLENS_DISCOVERY_CHAIN`, etc.
    fn apply_env_overrides(config: &mut GovlensConfig) {
        if let Ok(val) = std::env::var("GOVLENS_DISCOVERY_ROOT") {
            config.discovery.root = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("GOVLENS_DISCOVERY_CHAIN") {
            config.discovery.chain = Some(val);
        }
        if let Ok(val) = std::env::var("GOVLENS_INVERSION_INCLUDE_UNKNOWN_ADDRESSES") {
            if let Ok(v) = val.parse::<bool>() {
                config.inversion.include_unknown_addresses = Some(v);
            }
        }
    }

    fn apply_overrides(config: &mut GovlensConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.discovery_root {
            config.discovery.root = Some(v.clone());
        }
        if let Some(ref v) = overrides.chain {
            config.discovery.chain = Some(v.clone());
        }
        if let Some(v) = overrides.include_unknown_addresses {
            config.inversion.include_unknown_addresses = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
