//! Snapshot loading errors.

use super::error_code::{self, GovlensErrorCode};

/// Errors raised by a snapshot source. A snapshot is never defaulted:
/// a missing or malformed document fails the run.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("No discovery snapshot for project {project} at {path}")]
    NotFound { project: String, path: String },

    #[error("Failed to read discovery snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed discovery snapshot {path}: {message}")]
    Malformed { path: String, message: String },
}

impl GovlensErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::SNAPSHOT_NOT_FOUND,
            Self::Io { .. } => error_code::SNAPSHOT_IO,
            Self::Malformed { .. } => error_code::SNAPSHOT_MALFORMED,
        }
    }
}
