//! Application state.

use snapdiff_core::domain::{ColName, SnapshotDiff, TableDiff};
use snapdiff_core::layout::LayoutConfig;
use snapdiff_core::view::{DiffTableState, ResizeController};

/// Right edge of one rendered column, for mouse hit-testing.
///
/// Rebuilt on every draw from the frame's actual cell geometry, so drag
/// targets always match what is on screen.
#[derive(Debug, Clone)]
pub struct ColumnEdge {
    pub name: ColName,
    /// Terminal column of the edge.
    pub x: u16,
    /// Width the column is rendered at right now.
    pub rendered_width: f64,
    /// Full natural width, the resize cap.
    pub full_width: f64,
}

/// TUI application state.
pub struct AppState {
    pub diff: SnapshotDiff,
    /// Display session per table, index-aligned with `diff.table_diffs`.
    pub table_states: Vec<DiffTableState>,
    pub current_table: usize,
    pub config: LayoutConfig,
    pub resize: ResizeController,
    /// Column edges from the last draw of the current table.
    pub column_edges: Vec<ColumnEdge>,
    pub show_help: bool,
    pub terminal_width: u16,
}

impl AppState {
    pub fn new(diff: SnapshotDiff, config: LayoutConfig, expanded: bool) -> Self {
        let table_states = diff
            .table_diffs
            .iter()
            .map(|_| {
                let mut s = DiffTableState::new();
                s.is_expanded = expanded;
                s
            })
            .collect();
        Self {
            diff,
            table_states,
            current_table: 0,
            config,
            resize: ResizeController::new(),
            column_edges: Vec::new(),
            show_help: false,
            terminal_width: 0,
        }
    }

    pub fn current_diff(&self) -> &TableDiff {
        &self.diff.table_diffs[self.current_table]
    }

    pub fn current_state(&self) -> &DiffTableState {
        &self.table_states[self.current_table]
    }

    pub fn current_state_mut(&mut self) -> &mut DiffTableState {
        &mut self.table_states[self.current_table]
    }

    /// Switches tables, abandoning any in-flight resize drag. Per-table
    /// state (page, toggles, overrides) survives the switch.
    pub fn switch_table(&mut self, index: usize) {
        if index < self.diff.table_diffs.len() && index != self.current_table {
            self.resize.cancel_all();
            self.column_edges.clear();
            self.current_table = index;
        }
    }

    pub fn next_table(&mut self) {
        let next = (self.current_table + 1) % self.diff.table_diffs.len();
        self.switch_table(next);
    }

    pub fn prev_table(&mut self) {
        let len = self.diff.table_diffs.len();
        let prev = (self.current_table + len - 1) % len;
        self.switch_table(prev);
    }

    /// Edge under the pointer, within one cell of tolerance.
    pub fn edge_at(&self, x: u16) -> Option<&ColumnEdge> {
        self.column_edges
            .iter()
            .find(|e| x.abs_diff(e.x) <= 1)
    }
}
