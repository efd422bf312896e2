//! Error handling for govlens.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod address_error;
pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod record_error;
pub mod registry_error;
pub mod snapshot_error;
pub mod template_error;
pub mod value_error;

pub use address_error::AddressError;
pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::GovlensErrorCode;
pub use record_error::RecordError;
pub use registry_error::RegistryError;
pub use snapshot_error::SnapshotError;
pub use template_error::TemplateError;
pub use value_error::ValueError;
