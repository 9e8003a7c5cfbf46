//! Width Model: optimal per-column display widths for a table diff.
//!
//! Balances full-content legibility against usable screen space: every
//! column gets its natural content width plus a capped variant for columns
//! whose longest value exceeds the truncation cap.

use crate::domain::{ColName, TableDiff};

use super::{LayoutConfig, display_units};

/// Computed widths for one non-key column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidth {
    pub name: ColName,
    /// Natural width fitting the longest value and the column name.
    pub full: f64,
    /// Capped width; equals `full` when no value exceeds the cap.
    pub truncated: f64,
}

impl ColumnWidth {
    pub fn is_truncated(&self) -> bool {
        self.truncated != self.full
    }
}

/// Width Model output over one table diff and a visible column list.
#[derive(Debug, Clone, PartialEq)]
pub struct TableWidths {
    pub primary_width: f64,
    /// One entry per visible column, in visible order.
    pub cols: Vec<ColumnWidth>,
    /// Total table width with every column at its full width.
    pub total_full: f64,
    /// Total table width with every column at its truncated width.
    pub total_truncated: f64,
    /// True iff at least one column's truncated width differs from its full
    /// width; flags whether an expand/collapse control is meaningful.
    pub any_truncated: bool,
}

/// Computes per-column and total widths for `visible_cols` of `diff`.
///
/// A column with no cell on either side contributes only its own name
/// length (malformed diffs degrade gracefully). A table with zero visible
/// columns totals to the primary width plus the outer border.
pub fn compute_widths(diff: &TableDiff, visible_cols: &[ColName], cfg: &LayoutConfig) -> TableWidths {
    let primary_units = diff
        .primary_values
        .iter()
        .map(|v| display_units(v))
        .chain(std::iter::once(display_units(&diff.primary_col_name)))
        .max()
        .unwrap_or(0);
    let primary_width = primary_units as f64 * cfg.unit_scale;

    let cols: Vec<ColumnWidth> = visible_cols
        .iter()
        .map(|name| {
            let name_units = display_units(name);
            // Absent cells contribute length 0 (they are skipped entirely).
            let value_units = diff
                .cells_for_col(name)
                .map(|c| display_units(&c.value))
                .max()
                .unwrap_or(0);
            let full_units = name_units.max(value_units);
            let truncated_units = if value_units > cfg.truncate_cap_units {
                name_units.max(cfg.truncate_cap_units)
            } else {
                full_units
            };
            ColumnWidth {
                name: name.clone(),
                full: full_units as f64 * cfg.unit_scale,
                truncated: truncated_units as f64 * cfg.unit_scale,
            }
        })
        .collect();

    let chrome = cfg.chrome_width(cols.len());
    let total_full = primary_width + cols.iter().map(|c| c.full).sum::<f64>() + chrome;
    let total_truncated = primary_width + cols.iter().map(|c| c.truncated).sum::<f64>() + chrome;
    let any_truncated = cols.iter().any(ColumnWidth::is_truncated);

    TableWidths {
        primary_width,
        cols,
        total_full,
        total_truncated,
        any_truncated,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::domain::{ColDiff, DiffStatus, TableDiff};

    use super::*;

    fn diff_with_values(values1: &[(&str, &str, &str)]) -> TableDiff {
        // (primary, col, value) triples, all landing in row_diffs1.
        let mut row_diffs1: HashMap<String, HashMap<String, ColDiff>> = HashMap::new();
        let mut primary_values = Vec::new();
        let mut col_names = Vec::new();
        for &(pk, col, value) in values1 {
            if !primary_values.contains(&pk.to_string()) {
                primary_values.push(pk.to_string());
            }
            if !col_names.contains(&col.to_string()) {
                col_names.push(col.to_string());
            }
            row_diffs1
                .entry(pk.to_string())
                .or_default()
                .insert(col.to_string(), ColDiff::new(DiffStatus::Stay, value));
        }
        TableDiff {
            table_name: "t".to_string(),
            primary_col_name: "id".to_string(),
            primary_values,
            col_names,
            row_diffs1,
            row_diffs2: HashMap::new(),
        }
    }

    #[test]
    fn primary_width_covers_name_and_values() {
        let cfg = LayoutConfig::terminal_cells();
        let diff = diff_with_values(&[("1234567890", "a", "x")]);
        let w = compute_widths(&diff, &diff.col_names, &cfg);
        assert_eq!(w.primary_width, 10.0);

        let diff = diff_with_values(&[("1", "a", "x")]);
        // Column name "id" is longer than value "1".
        let w = compute_widths(&diff, &diff.col_names, &cfg);
        assert_eq!(w.primary_width, 2.0);
    }

    #[test]
    fn long_value_is_capped_at_cap_units() {
        // Scenario D: longest value 200 ASCII chars, cap 21.
        let cfg = LayoutConfig::default();
        let long = "v".repeat(200);
        let diff = diff_with_values(&[("1", "col", long.as_str())]);
        let w = compute_widths(&diff, &diff.col_names, &cfg);
        assert_eq!(w.cols[0].full, 200.0 * cfg.unit_scale);
        assert_eq!(w.cols[0].truncated, 21.0 * cfg.unit_scale);
        assert!(w.any_truncated);
    }

    #[test]
    fn truncation_never_undercuts_column_name() {
        let cfg = LayoutConfig::terminal_cells();
        let long = "v".repeat(100);
        let diff = diff_with_values(&[("1", "a_rather_long_column_name_here", long.as_str())]);
        let w = compute_widths(&diff, &diff.col_names, &cfg);
        assert_eq!(w.cols[0].truncated, 30.0); // name is 30 units, above the cap
        assert!(w.cols[0].is_truncated());
    }

    #[test]
    fn truncated_never_exceeds_full() {
        let cfg = LayoutConfig::default();
        let long = "v".repeat(50);
        let diff = diff_with_values(&[("1", "a", "short"), ("1", "b", long.as_str())]);
        let w = compute_widths(&diff, &diff.col_names, &cfg);
        for c in &w.cols {
            assert!(c.truncated <= c.full, "column {}", c.name);
        }
        assert!(w.total_truncated <= w.total_full);
    }

    #[test]
    fn any_truncated_iff_some_column_differs() {
        let cfg = LayoutConfig::default();
        let diff = diff_with_values(&[("1", "a", "short")]);
        let w = compute_widths(&diff, &diff.col_names, &cfg);
        assert!(!w.any_truncated);
        assert_eq!(w.total_full, w.total_truncated);
    }

    #[test]
    fn zero_columns_total_is_primary_plus_border() {
        let cfg = LayoutConfig::default();
        let mut diff = diff_with_values(&[("1", "a", "x")]);
        diff.col_names.clear();
        diff.row_diffs1.clear();
        let w = compute_widths(&diff, &[], &cfg);
        assert!(w.cols.is_empty());
        assert_eq!(w.total_full, w.primary_width + 2.0 * cfg.table_border);
    }

    #[test]
    fn column_without_cells_uses_its_name_only() {
        // colNames naming a column absent from every row is valid input.
        let cfg = LayoutConfig::terminal_cells();
        let mut diff = diff_with_values(&[("1", "a", "x")]);
        diff.col_names.push("phantom".to_string());
        let w = compute_widths(&diff, &diff.col_names, &cfg);
        assert_eq!(w.cols[1].full, 7.0);
        assert_eq!(w.cols[1].truncated, 7.0);
    }

    #[test]
    fn total_monotonic_in_visible_columns() {
        let cfg = LayoutConfig::default();
        let diff = diff_with_values(&[("1", "a", "xx"), ("1", "b", "yy"), ("1", "c", "zz")]);
        let mut prev = 0.0;
        for n in 0..=3 {
            let w = compute_widths(&diff, &diff.col_names[..n], &cfg);
            assert!(w.total_full >= prev);
            assert!(w.total_full >= w.primary_width);
            prev = w.total_full;
        }
    }

    #[test]
    fn wide_glyphs_count_double() {
        let cfg = LayoutConfig::terminal_cells();
        let diff = diff_with_values(&[("1", "name", "山田太郎")]);
        let w = compute_widths(&diff, &diff.col_names, &cfg);
        assert_eq!(w.cols[0].full, 8.0);
    }
}
