//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a
//! specific rendering surface. The TUI maps them to ratatui Styles; the
//! original HTML frontend mapped the same classes to CSS.

use crate::domain::{ColDiff, ColName, DiffStatus};
use crate::layout::PageNav;

/// Cell-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellStyleClass {
    /// Unchanged value.
    #[default]
    Stay,
    /// Added / changed-to value (green).
    Added,
    /// Deleted / changed-from value (red).
    Deleted,
    /// Column not applicable, or cell absent entirely (blank/dim).
    None,
}

impl From<DiffStatus> for CellStyleClass {
    fn from(status: DiffStatus) -> Self {
        match status {
            DiffStatus::Stay => CellStyleClass::Stay,
            DiffStatus::Added => CellStyleClass::Added,
            DiffStatus::Deleted => CellStyleClass::Deleted,
            DiffStatus::None => CellStyleClass::None,
        }
    }
}

/// One rendered cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffCell {
    pub text: String,
    pub style: CellStyleClass,
    /// True for the reserved `<null>` display value; gets an extra
    /// distinguishing treatment on top of `style`.
    pub is_null: bool,
}

impl DiffCell {
    /// Cell for an absent entry (row or cell missing on that side).
    pub fn absent() -> Self {
        Self {
            text: String::new(),
            style: CellStyleClass::None,
            is_null: false,
        }
    }

    pub fn from_col_diff(cell: &ColDiff) -> Self {
        Self {
            text: cell.value.clone(),
            style: cell.status.into(),
            is_null: cell.is_null(),
        }
    }
}

/// Two aligned snapshot rows sharing a single primary-key cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPair {
    pub primary_value: String,
    /// Snapshot-1 view, one cell per visible column.
    pub snapshot1: Vec<DiffCell>,
    /// Snapshot-2 view, one cell per visible column.
    pub snapshot2: Vec<DiffCell>,
}

/// Single highlighted row for tables with no non-key columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryOnlyRow {
    pub primary_value: String,
    /// `Deleted` (key only in snapshot 1) or `Added` (only in snapshot 2).
    pub style: CellStyleClass,
}

/// Body rows for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffTableBody {
    /// Normal table: paired two-row-per-key layout.
    Paired(Vec<RowPair>),
    /// Pure relation/junction table: highlighted single rows.
    PrimaryOnly(Vec<PrimaryOnlyRow>),
}

/// One visible column with its resolved display widths.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleColumn {
    pub name: ColName,
    /// Width to render now (expand mode and overrides applied).
    pub width: f64,
    pub full_width: f64,
    pub truncated_width: f64,
}

/// Complete per-table view model, ready for any rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffTableViewModel {
    pub table_name: String,
    pub primary_col_name: String,
    pub primary_width: f64,
    pub columns: Vec<VisibleColumn>,
    pub body: DiffTableBody,
    pub page: PageNav,
    /// Total width at the currently selected per-column widths.
    pub total_width: f64,
    /// True iff the table has no-diff columns, i.e. the hide toggle does
    /// anything at all.
    pub has_hidden_columns: bool,
    /// True iff some visible column is truncated, i.e. the expand toggle
    /// does anything at all.
    pub is_truncation_active: bool,
}
