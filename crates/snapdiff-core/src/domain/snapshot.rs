//! Snapshot metadata and per-table dump configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SnapshotId = String;

pub fn create_snapshot_id() -> SnapshotId {
    Uuid::new_v4().to_string()
}

/// Listing entry for one captured snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub snapshot_id: SnapshotId,
    pub snapshot_name: String,
    pub create_at: DateTime<Utc>,
}

/// How much of a table the backend should dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpConfigValue {
    /// Dump a bounded number of rows.
    Limited,
    /// Skip the table entirely.
    Ignore,
    /// Dump a percentage of rows (kept as the backend's string form).
    #[serde(untagged)]
    Percent(String),
}

/// Per-table dump configuration sent with a dump command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpConfig {
    pub table_name: String,
    pub col_names: Vec<String>,
    pub value: DumpConfigValue,
}
