//! Filesystem snapshot source reading `<root>/<project>/<chain>/discovered.json`.

use std::path::PathBuf;

use super::SnapshotSource;
use crate::config::DiscoveryConfig;
use crate::constants::DISCOVERED_FILE_NAME;
use crate::errors::SnapshotError;
use crate::snapshot::Snapshot;
use crate::tracing::fields::SNAPSHOT_LOAD;

#[derive(Debug, Clone)]
pub struct FsSnapshotSource {
    root: PathBuf,
    chain: String,
}

impl FsSnapshotSource {
    pub fn new(root: impl Into<PathBuf>, chain: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            chain: chain.into(),
        }
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self::new(config.effective_root(), config.effective_chain())
    }

    /// Path of the snapshot document for `project`.
    pub fn snapshot_path(&self, project: &str) -> PathBuf {
        self.root
            .join(project)
            .join(&self.chain)
            .join(DISCOVERED_FILE_NAME)
    }
}

impl SnapshotSource for FsSnapshotSource {
    fn load(&self, project: &str) -> Result<Snapshot, SnapshotError> {
        let _span = tracing::info_span!(SNAPSHOT_LOAD, project).entered();
        let path = self.snapshot_path(project);
        let shown = path.display().to_string();

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(project, path = %shown, "discovery snapshot missing");
                return Err(SnapshotError::NotFound {
                    project: project.to_string(),
                    path: shown,
                });
            }
            Err(source) => return Err(SnapshotError::Io { path: shown, source }),
        };

        let mut snapshot = Snapshot::from_json(&content, &shown)?;
        if snapshot.name.is_empty() {
            snapshot.name = project.to_string();
        }
        if snapshot.chain.is_empty() {
            snapshot.chain = self.chain.clone();
        }

        tracing::info!(
            project,
            chain = %snapshot.chain,
            contracts = snapshot.contracts.len(),
            eoas = snapshot.eoas.len(),
            "discovery snapshot loaded"
        );
        Ok(snapshot)
    }
}
