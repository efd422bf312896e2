//! Top-level analysis errors.

use super::error_code::GovlensErrorCode;
use super::{
    ConfigError, RecordError, RegistryError, SnapshotError, TemplateError, ValueError,
};

/// Errors that abort an analysis run.
/// Aggregates subsystem errors via `From` conversions. Every variant is a
/// hard failure; there is no partial-result mode.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GovlensErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Registry(e) => e.error_code(),
            Self::Value(e) => e.error_code(),
            Self::Template(e) => e.error_code(),
            Self::Record(e) => e.error_code(),
            Self::Snapshot(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
