//! UI-agnostic view models and interactive per-table state.

pub mod common;
mod diff_table;
mod resize;

pub use common::{CellStyleClass, DiffCell, DiffTableBody, DiffTableViewModel, PrimaryOnlyRow, RowPair, VisibleColumn};
pub use diff_table::{DiffTableState, build_diff_table_view};
pub use resize::ResizeController;
