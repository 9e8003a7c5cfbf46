//! Read-only bridge over a saved diff document.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{Project, SnapshotDiff, SnapshotSummary};

use super::{BridgeError, DiffBackend};

/// Backend serving one `SnapshotDiff` loaded from a JSON file — the
/// interchange document the real backend answers a diff fetch with.
/// Mutating commands are unsupported.
#[derive(Debug)]
pub struct FileBackend {
    diff: SnapshotDiff,
}

impl FileBackend {
    pub fn load(path: &Path) -> Result<Self, BridgeError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| BridgeError::Backend(format!("{}: {}", path.display(), e)))?;
        let diff: SnapshotDiff =
            serde_json::from_str(&raw).map_err(|e| BridgeError::Parse(e.to_string()))?;
        debug!(
            path = %path.display(),
            tables = diff.table_diffs.len(),
            "loaded snapshot diff"
        );
        Ok(Self { diff })
    }

    /// The loaded diff, bypassing the id-checked `fetch_diff` path.
    pub fn diff(&self) -> &SnapshotDiff {
        &self.diff
    }
}

impl DiffBackend for FileBackend {
    fn create_project(&mut self, _project: &Project) -> Result<(), BridgeError> {
        Err(BridgeError::Unsupported("create_project"))
    }

    fn update_project(&mut self, _project: &Project) -> Result<(), BridgeError> {
        Err(BridgeError::Unsupported("update_project"))
    }

    fn delete_project(&mut self, _project_id: &str) -> Result<(), BridgeError> {
        Err(BridgeError::Unsupported("delete_project"))
    }

    fn list_snapshots(&self, _project_id: &str) -> Result<Vec<SnapshotSummary>, BridgeError> {
        Err(BridgeError::Unsupported("list_snapshots"))
    }

    fn dump_snapshot(
        &mut self,
        _project_id: &str,
        _name: &str,
    ) -> Result<SnapshotSummary, BridgeError> {
        Err(BridgeError::Unsupported("dump_snapshot"))
    }

    fn fetch_diff(
        &self,
        snapshot_id1: &str,
        snapshot_id2: &str,
    ) -> Result<SnapshotDiff, BridgeError> {
        if self.diff.snapshot_id1 == snapshot_id1 && self.diff.snapshot_id2 == snapshot_id2 {
            Ok(self.diff.clone())
        } else {
            Err(BridgeError::NotFound(format!(
                "diff for snapshots {} / {}",
                snapshot_id1, snapshot_id2
            )))
        }
    }
}
