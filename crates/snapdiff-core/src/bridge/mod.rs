//! Backend command bridge.
//!
//! The heavy lifting — connecting to databases, dumping tables, computing
//! row/column diffs — happens in an external backend service. This module
//! defines the command surface the presentation layer talks to and a
//! file-backed implementation for viewing an already-computed diff.

mod file;

pub use file::FileBackend;

use crate::domain::{Project, SnapshotDiff, SnapshotSummary};

/// Errors crossing the bridge.
#[derive(Debug, Clone)]
pub enum BridgeError {
    /// The backend reported a failure.
    Backend(String),
    /// A referenced project/snapshot/diff does not exist.
    NotFound(String),
    /// The backend's response could not be decoded.
    Parse(String),
    /// The backend does not implement this command.
    Unsupported(&'static str),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::Backend(msg) => write!(f, "backend error: {}", msg),
            BridgeError::NotFound(what) => write!(f, "not found: {}", what),
            BridgeError::Parse(msg) => write!(f, "parse error: {}", msg),
            BridgeError::Unsupported(cmd) => write!(f, "unsupported command: {}", cmd),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Command surface of the external diff backend.
///
/// Object-safe so frontends can hold a `Box<dyn DiffBackend>` and swap the
/// transport (IPC bridge, file, test double) freely. Protocol semantics
/// beyond these data shapes are out of scope here.
pub trait DiffBackend {
    fn create_project(&mut self, project: &Project) -> Result<(), BridgeError>;

    fn update_project(&mut self, project: &Project) -> Result<(), BridgeError>;

    fn delete_project(&mut self, project_id: &str) -> Result<(), BridgeError>;

    fn list_snapshots(&self, project_id: &str) -> Result<Vec<SnapshotSummary>, BridgeError>;

    /// Captures a new snapshot of the project's database.
    fn dump_snapshot(&mut self, project_id: &str, name: &str)
    -> Result<SnapshotSummary, BridgeError>;

    /// Fetches the computed diff between two snapshots, in full — the core
    /// assumes no streaming or partial delivery.
    fn fetch_diff(
        &self,
        snapshot_id1: &str,
        snapshot_id2: &str,
    ) -> Result<SnapshotDiff, BridgeError>;
}
