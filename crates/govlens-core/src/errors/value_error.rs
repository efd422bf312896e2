//! Value access errors.

use crate::types::ValueShape;

use super::error_code::{self, GovlensErrorCode};

/// Errors raised when a captured value is absent or has the wrong shape.
///
/// `key` names the location that was read: a value key (`owner`), an
/// upgrade parameter (`upgradeability.admin`), or an indexed element
/// (`constructorArgs[2]`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("Value of key {key} does not exist in {contract} contract ({project})")]
    MissingValue {
        contract: String,
        key: String,
        project: String,
    },

    #[error("Value of key {key} in {contract} contract must be {expected}, found {found} ({project})")]
    TypeMismatch {
        contract: String,
        key: String,
        expected: ValueShape,
        found: ValueShape,
        project: String,
    },
}

impl GovlensErrorCode for ValueError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingValue { .. } => error_code::MISSING_VALUE,
            Self::TypeMismatch { .. } => error_code::TYPE_MISMATCH,
        }
    }
}
