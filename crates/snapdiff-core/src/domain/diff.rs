//! Per-table snapshot comparison result.
//!
//! A [`TableDiff`] is produced wholesale by the backend diff computation and
//! is the sole input to the layout and view-model transforms. Field names
//! serialize in camelCase to match the backend's JSON documents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PrimaryValue = String;
pub type ColName = String;
pub type DiffId = String;

/// Reserved display value meaning SQL NULL. Gets distinguishing styling.
pub const NULL_DISPLAY: &str = "<null>";

pub fn create_diff_id() -> DiffId {
    Uuid::new_v4().to_string()
}

/// Which snapshot side of the comparison a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// First (older) snapshot.
    Snapshot1,
    /// Second (newer) snapshot.
    Snapshot2,
}

/// Cell-level diff status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Unchanged across snapshots.
    Stay,
    /// Present only in snapshot 2, or the changed-to value.
    Added,
    /// Present only in snapshot 1, or the changed-from value.
    Deleted,
    /// Column not applicable to this row in this snapshot side.
    None,
}

/// One cell of a row diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColDiff {
    pub status: DiffStatus,
    pub value: String,
}

impl ColDiff {
    pub fn new(status: DiffStatus, value: impl Into<String>) -> Self {
        Self {
            status,
            value: value.into(),
        }
    }

    /// True when the cell carries the reserved SQL NULL display value.
    pub fn is_null(&self) -> bool {
        self.value == NULL_DISPLAY
    }
}

/// Row diffs keyed by primary value; a row's map need not contain every
/// column name (an absent cell is distinct from a `None`-status cell).
pub type RowDiffs = HashMap<PrimaryValue, HashMap<ColName, ColDiff>>;

/// The comparison result for one table between two snapshots.
///
/// `primary_values` carries the server-determined row order; the maps are
/// unordered. A primary value may be a composite key pre-joined into one
/// string (e.g. `1-"001"`); it is never parsed here, only used as an opaque
/// token for slicing and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDiff {
    pub table_name: String,
    pub primary_col_name: ColName,
    pub primary_values: Vec<PrimaryValue>,
    pub col_names: Vec<ColName>,
    pub row_diffs1: RowDiffs,
    pub row_diffs2: RowDiffs,
}

impl TableDiff {
    pub fn is_empty(&self) -> bool {
        self.row_diffs1.is_empty() && self.row_diffs2.is_empty()
    }

    /// Number of aligned rows (length of the ordered primary value list).
    pub fn row_count(&self) -> usize {
        self.primary_values.len()
    }

    fn row_diffs(&self, side: Side) -> &RowDiffs {
        match side {
            Side::Snapshot1 => &self.row_diffs1,
            Side::Snapshot2 => &self.row_diffs2,
        }
    }

    /// Looks up one cell. `None` means the row or the cell is absent on that
    /// side, which is not an error (and not the same as a `None` status).
    pub fn cell(&self, side: Side, primary_value: &str, col_name: &str) -> Option<&ColDiff> {
        self.row_diffs(side)
            .get(primary_value)
            .and_then(|row| row.get(col_name))
    }

    /// Iterates every cell stored for `col_name` across both sides.
    pub fn cells_for_col<'a>(&'a self, col_name: &'a str) -> impl Iterator<Item = &'a ColDiff> {
        self.row_diffs1
            .values()
            .chain(self.row_diffs2.values())
            .filter_map(move |row| row.get(col_name))
    }
}

/// The full comparison between two snapshots, one [`TableDiff`] per table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDiff {
    pub diff_id: DiffId,
    pub snapshot_id1: String,
    pub snapshot_id2: String,
    pub table_diffs: Vec<TableDiff>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(status: DiffStatus, value: &str) -> ColDiff {
        ColDiff::new(status, value)
    }

    fn table_with_row(col: &str, c: ColDiff) -> TableDiff {
        let mut row = HashMap::new();
        row.insert(col.to_string(), c);
        let mut row_diffs1 = HashMap::new();
        row_diffs1.insert("1".to_string(), row);
        TableDiff {
            table_name: "user".to_string(),
            primary_col_name: "id".to_string(),
            primary_values: vec!["1".to_string()],
            col_names: vec![col.to_string()],
            row_diffs1,
            row_diffs2: HashMap::new(),
        }
    }

    #[test]
    fn cell_lookup_distinguishes_absent_from_none_status() {
        let diff = table_with_row("age", cell(DiffStatus::None, ""));

        let c = diff.cell(Side::Snapshot1, "1", "age").unwrap();
        assert_eq!(c.status, DiffStatus::None);

        // Absent cell and absent row both resolve to Option::None.
        assert!(diff.cell(Side::Snapshot1, "1", "name").is_none());
        assert!(diff.cell(Side::Snapshot2, "1", "age").is_none());
        assert!(diff.cell(Side::Snapshot1, "2", "age").is_none());
    }

    #[test]
    fn null_display_value_is_flagged() {
        assert!(cell(DiffStatus::Stay, NULL_DISPLAY).is_null());
        assert!(!cell(DiffStatus::Stay, "null").is_null());
    }

    #[test]
    fn serde_uses_backend_field_names() {
        let diff = table_with_row("age", cell(DiffStatus::Deleted, "29"));
        let json = serde_json::to_string(&diff).unwrap();
        assert!(json.contains("\"tableName\""));
        assert!(json.contains("\"primaryColName\""));
        assert!(json.contains("\"rowDiffs1\""));
        assert!(json.contains("\"status\":\"deleted\""));

        let back: TableDiff = serde_json::from_str(&json).unwrap();
        assert_eq!(back, diff);
    }
}
