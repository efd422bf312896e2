//! GovlensErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so that callers in the report pipeline
/// can branch on a stable code instead of parsing messages.
pub trait GovlensErrorCode {
    /// Returns the error code string (e.g., "AMBIGUOUS_NAME").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ADDRESS: &str = "INVALID_ADDRESS";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const AMBIGUOUS_NAME: &str = "AMBIGUOUS_NAME";
pub const MISSING_VALUE: &str = "MISSING_VALUE";
pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
pub const MISSING_TIMESTAMP: &str = "MISSING_TIMESTAMP";
pub const NOT_MULTISIG: &str = "NOT_MULTISIG";
pub const TEMPLATE_ARITY_MISMATCH: &str = "TEMPLATE_ARITY_MISMATCH";
pub const SNAPSHOT_NOT_FOUND: &str = "SNAPSHOT_NOT_FOUND";
pub const SNAPSHOT_IO: &str = "SNAPSHOT_IO";
pub const SNAPSHOT_MALFORMED: &str = "SNAPSHOT_MALFORMED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
