//! Shared constants for the govlens analyzer.

/// govlens version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Chain whose discovery output is read when none is configured.
pub const DEFAULT_CHAIN: &str = "ethereum";

/// Directory holding per-project discovery output when none is configured.
pub const DEFAULT_DISCOVERY_ROOT: &str = "discovery";

/// File name of a discovery snapshot inside `<root>/<project>/<chain>/`.
pub const DISCOVERED_FILE_NAME: &str = "discovered.json";

/// Project-level configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "govlens.toml";

/// Value key holding a contract's constructor arguments.
pub const CONSTRUCTOR_ARGS_KEY: &str = "constructorArgs";

/// Value key holding a Gnosis Safe's owners.
pub const SAFE_OWNERS_KEY: &str = "getOwners";

/// Value key holding a Gnosis Safe's signing threshold.
pub const SAFE_THRESHOLD_KEY: &str = "getThreshold";

/// Separator used when several names are rendered into one sentence slot.
pub const LIST_SEPARATOR: &str = ", ";
