//! Address parsing errors.

use super::error_code::{self, GovlensErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Address {input:?} is missing the 0x prefix")]
    MissingPrefix { input: String },

    #[error("Address {input:?} has {digits} hex digits, expected 40")]
    InvalidLength { input: String, digits: usize },

    #[error("Address {input:?} contains non-hex characters")]
    InvalidHex { input: String },
}

impl GovlensErrorCode for AddressError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ADDRESS
    }
}
