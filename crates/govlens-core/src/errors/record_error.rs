//! Descriptive record errors.

use super::error_code::{self, GovlensErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error(
        "No timestamp was found for the escrow at {address} ({project}). \
         Run discovery for that address to capture sinceTimestamp, \
         or provide a sinceTimestamp override."
    )]
    MissingTimestamp { address: String, project: String },

    #[error("Contract {contract} is not a Gnosis Safe, its upgradeability is {kind} ({project})")]
    NotMultisig {
        contract: String,
        kind: String,
        project: String,
    },
}

impl GovlensErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTimestamp { .. } => error_code::MISSING_TIMESTAMP,
            Self::NotMultisig { .. } => error_code::NOT_MULTISIG,
        }
    }
}
