//! Upgrade delay descriptions.

use govlens_core::errors::AnalysisError;

use crate::discovery::ProjectDiscovery;

const UNITS: [(u64, &str); 4] = [(86_400, "day"), (3_600, "hour"), (60, "minute"), (1, "second")];

impl ProjectDiscovery {
    /// Sentence describing the delay held in upgrade parameter `key`.
    pub fn delay_string_from_upgradeability(
        &self,
        contract_id: &str,
        key: &str,
    ) -> Result<String, AnalysisError> {
        let seconds = self.values().upgrade_param_number(contract_id, key)?;
        Ok(delay_description(seconds))
    }
}

pub fn delay_description(seconds: u64) -> String {
    format!("There is a {} delay on code changes.", format_duration(seconds))
}

/// `691200` → `"8 days"`, `5400` → `"1 hour 30 minutes"`, `0` → `"0 seconds"`.
pub fn format_duration(seconds: u64) -> String {
    let mut remaining = seconds;
    let mut parts = Vec::new();
    for (size, unit) in UNITS {
        let count = remaining / size;
        remaining %= size;
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{count} {unit}{plural}"));
        }
    }
    if parts.is_empty() {
        return "0 seconds".to_string();
    }
    parts.join(" ")
}
