//! Contract registry errors.

use super::error_code::{self, GovlensErrorCode};

/// Errors raised while resolving a contract identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("No contract {identifier} found ({project})")]
    NotFound { identifier: String, project: String },

    /// More than one record carries the name. The snapshot is at fault;
    /// no record is picked.
    #[error("Found {count} contracts named {name}, expected exactly one ({project})")]
    AmbiguousName {
        name: String,
        count: usize,
        project: String,
    },
}

impl GovlensErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::AmbiguousName { .. } => error_code::AMBIGUOUS_NAME,
        }
    }
}
