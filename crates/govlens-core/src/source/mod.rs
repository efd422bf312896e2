//! Snapshot sources: the boundary to the external discovery process.

pub mod fs_source;

pub use fs_source::FsSnapshotSource;

use crate::errors::SnapshotError;
use crate::snapshot::Snapshot;

/// Provides the discovery snapshot for a project.
///
/// Implementations fail fast: an absent or malformed document is an error,
/// never an empty snapshot.
pub trait SnapshotSource {
    fn load(&self, project: &str) -> Result<Snapshot, SnapshotError>;
}
