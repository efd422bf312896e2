//! Escrow records.

use govlens_core::errors::{AnalysisError, RecordError};

use super::types::{EscrowContract, EscrowOptions, EscrowRecord};
use crate::discovery::ProjectDiscovery;

impl ProjectDiscovery {
    /// Escrow record for the contract at `options.address`.
    ///
    /// The deployment timestamp comes from `options.since_timestamp`, else
    /// from discovery. Neither being present is an error, and a zero
    /// timestamp counts as absent.
    pub fn escrow_details(&self, options: EscrowOptions) -> Result<EscrowRecord, AnalysisError> {
        let contract = self.registry().by_address(options.address)?;
        let since_timestamp = options
            .since_timestamp
            .or(contract.since_timestamp)
            .filter(|timestamp| *timestamp != 0)
            .ok_or_else(|| RecordError::MissingTimestamp {
                address: options.address.to_string(),
                project: self.project_name().to_string(),
            })?;

        Ok(EscrowRecord {
            address: options.address,
            new_version: true,
            since_timestamp,
            tokens: options.tokens,
            contract: EscrowContract {
                name: options.name.unwrap_or_else(|| contract.name.clone()),
                description: options.description,
                upgradeability: contract.upgradeability.clone(),
                upgradable_by: options.upgradable_by,
                upgrade_delay: options.upgrade_delay,
            },
        })
    }
}
