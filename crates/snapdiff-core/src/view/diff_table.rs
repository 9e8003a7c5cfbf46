//! Diff table view model: orchestrates paging, no-diff hiding, widths and
//! width overrides into a renderable structure.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{ColName, Side, TableDiff};
use crate::layout::{LayoutConfig, PageNav, compute_widths, no_diff_columns, slice};

use super::common::{
    CellStyleClass, DiffCell, DiffTableBody, DiffTableViewModel, PrimaryOnlyRow, RowPair,
    VisibleColumn,
};

/// Interactive state for one table's display session.
///
/// Owned by whatever holds the table on screen; passed explicitly through
/// [`build_diff_table_view`] rather than living in module globals.
#[derive(Debug, Clone, Default)]
pub struct DiffTableState {
    /// Zero-based offset of the current page into the primary values.
    pub page_start: usize,
    /// Show full (untruncated) column widths.
    pub is_expanded: bool,
    /// When false, columns from the no-diff set are omitted entirely.
    pub show_no_diff_cols: bool,
    /// Per-column manual width overrides from resize gestures.
    pub width_overrides: HashMap<ColName, f64>,
}

impl DiffTableState {
    pub fn new() -> Self {
        Self {
            page_start: 0,
            is_expanded: false,
            show_no_diff_cols: true,
            width_overrides: HashMap::new(),
        }
    }

    pub fn page_first(&mut self) {
        self.page_start = 0;
    }

    pub fn page_back(&mut self, page_size: usize) {
        self.page_start = self.page_start.saturating_sub(page_size);
    }

    pub fn page_forward(&mut self, page_size: usize, total: usize) {
        let last = PageNav::last_page_start(page_size, total);
        self.page_start = (self.page_start + page_size).min(last);
    }

    pub fn page_last(&mut self, page_size: usize, total: usize) {
        self.page_start = PageNav::last_page_start(page_size, total);
    }

    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    pub fn toggle_no_diff_cols(&mut self) {
        self.show_no_diff_cols = !self.show_no_diff_cols;
    }

    /// Commits a resize gesture's final width for `col`.
    pub fn set_width_override(&mut self, col: &str, width: f64) {
        self.width_overrides.insert(col.to_string(), width);
    }

    pub fn clear_width_overrides(&mut self) {
        self.width_overrides.clear();
    }
}

/// Builds the renderable view model for one table.
///
/// Recomputes, in order: the page slice, the no-diff set over the FULL
/// table (not the slice, so hidden columns do not flicker across pages),
/// the visible column list, and widths over the visible slice with expand
/// mode and overrides applied. Pure with respect to both inputs.
pub fn build_diff_table_view(
    diff: &TableDiff,
    state: &DiffTableState,
    cfg: &LayoutConfig,
) -> DiffTableViewModel {
    let total = diff.row_count();

    // A stale page start (data shrank) clamps to the last valid row rather
    // than erroring; a deliberate partial-page start is kept as-is.
    let page_start = state.page_start.min(total.saturating_sub(1));
    let page = slice(diff, page_start, page_start + cfg.page_size);

    let no_diff = no_diff_columns(diff);

    let visible_cols: Vec<ColName> = if state.show_no_diff_cols {
        diff.col_names.clone()
    } else {
        diff.col_names
            .iter()
            .filter(|c| !no_diff.contains(*c))
            .cloned()
            .collect()
    };

    let widths = compute_widths(&page, &visible_cols, cfg);

    let columns: Vec<VisibleColumn> = widths
        .cols
        .iter()
        .map(|cw| {
            let mut width = if state.is_expanded {
                cw.full
            } else {
                cw.truncated
            };
            // An override may shrink or grow a column but never past its
            // full natural width.
            if let Some(&o) = state.width_overrides.get(&cw.name)
                && o.is_finite()
            {
                width = o.clamp(0.0, cw.full);
            }
            VisibleColumn {
                name: cw.name.clone(),
                width,
                full_width: cw.full,
                truncated_width: cw.truncated,
            }
        })
        .collect();

    let total_width = widths.primary_width
        + columns.iter().map(|c| c.width).sum::<f64>()
        + cfg.chrome_width(columns.len());

    let body = if diff.col_names.is_empty() {
        DiffTableBody::PrimaryOnly(primary_only_rows(&page))
    } else {
        DiffTableBody::Paired(row_pairs(&page, &visible_cols))
    };

    trace!(
        table = %diff.table_name,
        page_start,
        visible = columns.len(),
        hidden = diff.col_names.len() - visible_cols.len(),
        "built diff table view"
    );

    DiffTableViewModel {
        table_name: diff.table_name.clone(),
        primary_col_name: diff.primary_col_name.clone(),
        primary_width: widths.primary_width,
        columns,
        body,
        page: PageNav::new(page_start, cfg.page_size, total),
        total_width,
        has_hidden_columns: !no_diff.is_empty(),
        is_truncation_active: widths.any_truncated,
    }
}

fn row_pairs(page: &TableDiff, visible_cols: &[ColName]) -> Vec<RowPair> {
    page.primary_values
        .iter()
        .map(|pk| {
            let cells = |side: Side| -> Vec<DiffCell> {
                visible_cols
                    .iter()
                    .map(|col| match page.cell(side, pk, col) {
                        Some(cell) => DiffCell::from_col_diff(cell),
                        None => DiffCell::absent(),
                    })
                    .collect()
            };
            RowPair {
                primary_value: pk.clone(),
                snapshot1: cells(Side::Snapshot1),
                snapshot2: cells(Side::Snapshot2),
            }
        })
        .collect()
}

fn primary_only_rows(page: &TableDiff) -> Vec<PrimaryOnlyRow> {
    let mut rows = Vec::new();
    for pk in &page.primary_values {
        // A key present in both sides with no non-key columns has nothing
        // to compare and produces no row.
        if page.row_diffs1.contains_key(pk) {
            rows.push(PrimaryOnlyRow {
                primary_value: pk.clone(),
                style: CellStyleClass::Deleted,
            });
        }
        if page.row_diffs2.contains_key(pk) {
            rows.push(PrimaryOnlyRow {
                primary_value: pk.clone(),
                style: CellStyleClass::Added,
            });
        }
    }
    rows
}
