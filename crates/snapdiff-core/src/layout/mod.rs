//! Pure layout transforms over a [`crate::domain::TableDiff`].
//!
//! Everything here is a side-effect-free function of immutable input plus a
//! [`LayoutConfig`]; safe to call repeatedly on every state change.

mod nodiff;
mod page;
mod width;

pub use nodiff::no_diff_columns;
pub use page::{PageNav, slice};
pub use width::{ColumnWidth, TableWidths, compute_widths};

use serde::{Deserialize, Serialize};

/// Tunable presentation constants.
///
/// The defaults are calibrated for a pixel-based surface; `terminal_cells`
/// maps one display unit to one terminal cell. These are presentation
/// parameters, not semantic invariants — only the additive structure of the
/// total-width formula is fixed (padding and borders scale with column
/// count, never with content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of one display unit (pixels per unit on a pixel surface).
    pub unit_scale: f64,
    /// Truncation cap in display units for over-long value columns.
    pub truncate_cap_units: usize,
    /// Horizontal cell padding, applied twice per column.
    pub cell_padding: f64,
    /// Border between adjacent cells.
    pub cell_border: f64,
    /// Outer table border, applied twice.
    pub table_border: f64,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit_scale: 9.6,
            truncate_cap_units: 21,
            cell_padding: 16.0,
            cell_border: 1.0,
            table_border: 2.0,
            page_size: 30,
        }
    }
}

impl LayoutConfig {
    /// Preset for terminal rendering: one unit per cell, single-cell chrome.
    pub fn terminal_cells() -> Self {
        Self {
            unit_scale: 1.0,
            truncate_cap_units: 21,
            cell_padding: 1.0,
            cell_border: 1.0,
            table_border: 1.0,
            page_size: 30,
        }
    }

    /// Fixed chrome width for `col_count` non-key columns: per-column
    /// padding, inter-cell borders, and the outer table border.
    pub fn chrome_width(&self, col_count: usize) -> f64 {
        col_count as f64 * 2.0 * self.cell_padding
            + col_count.saturating_sub(1) as f64 * self.cell_border
            + 2.0 * self.table_border
    }
}

/// Displayed length of a string in character units: printable ASCII
/// (0x20–0x7E) counts 1, everything else counts 2 (approximates single- vs
/// double-width glyphs).
pub fn display_units(s: &str) -> usize {
    s.chars()
        .map(|ch| if (' '..='~').contains(&ch) { 1 } else { 2 })
        .sum()
}
