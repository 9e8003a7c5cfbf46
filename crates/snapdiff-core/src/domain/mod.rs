//! Domain data model shared with the external diff backend.
//!
//! These types mirror the JSON shapes the backend produces and consumes.
//! The diff types are immutable inputs to the presentation core; nothing in
//! this crate has a write path back to storage.

mod diff;
mod project;
mod snapshot;

pub use diff::{
    ColDiff, ColName, DiffStatus, NULL_DISPLAY, PrimaryValue, RowDiffs, Side, SnapshotDiff,
    TableDiff,
};
pub use project::{Project, ProjectId, Rdbms, create_project_id};
pub use snapshot::{DumpConfig, DumpConfigValue, SnapshotId, SnapshotSummary, create_snapshot_id};
