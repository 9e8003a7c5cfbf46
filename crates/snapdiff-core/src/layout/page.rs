//! Page Slicer: windowed views over a table diff plus pagination summary.

use crate::domain::{RowDiffs, TableDiff};
use crate::fmt::group_digits;

/// Returns a windowed copy of `diff` over `[start, end)` of its primary
/// values (half-open, clamped to the valid range).
///
/// Table metadata is kept unchanged; the row maps are filtered to the keys
/// of the window. A key absent from an original map stays absent — slicing
/// never fabricates empty row entries. The identity slice `[0, row_count)`
/// reproduces the original row order and content.
pub fn slice(diff: &TableDiff, start: usize, end: usize) -> TableDiff {
    let len = diff.primary_values.len();
    let start = start.min(len);
    let end = end.min(len).max(start);

    let primary_values = diff.primary_values[start..end].to_vec();

    let filter = |rows: &RowDiffs| -> RowDiffs {
        primary_values
            .iter()
            .filter_map(|pk| rows.get(pk).map(|row| (pk.clone(), row.clone())))
            .collect()
    };

    TableDiff {
        table_name: diff.table_name.clone(),
        primary_col_name: diff.primary_col_name.clone(),
        col_names: diff.col_names.clone(),
        row_diffs1: filter(&diff.row_diffs1),
        row_diffs2: filter(&diff.row_diffs2),
        primary_values,
    }
}

/// Pagination summary for one page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNav {
    /// Zero-based offset of the first row on the page.
    pub start: usize,
    /// Zero-based exclusive end of the page window.
    pub end: usize,
    pub total: usize,
    /// Jump-to-first and step-back controls.
    pub back_enabled: bool,
    /// Step-forward and jump-to-last controls.
    pub forward_enabled: bool,
}

impl PageNav {
    pub fn new(start: usize, page_size: usize, total: usize) -> Self {
        let end = (start + page_size).min(total);
        Self {
            start,
            end,
            total,
            back_enabled: start > 0,
            forward_enabled: start < Self::last_page_start(page_size, total),
        }
    }

    /// Offset of the last page: `max(0, total - page_size)`.
    pub fn last_page_start(page_size: usize, total: usize) -> usize {
        total.saturating_sub(page_size)
    }

    /// 1-based inclusive range label: `"991 ~ 1,000 of 1,000"`.
    pub fn label(&self) -> String {
        let first = if self.total == 0 { 0 } else { self.start + 1 };
        format!(
            "{} ~ {} of {}",
            group_digits(first),
            group_digits(self.end),
            group_digits(self.total)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::domain::{ColDiff, DiffStatus};

    use super::*;

    fn diff_with_rows(n: usize) -> TableDiff {
        let primary_values: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        // Even keys only in side 1, odd keys only in side 2.
        let mut row_diffs1 = HashMap::new();
        let mut row_diffs2 = HashMap::new();
        for (i, pk) in primary_values.iter().enumerate() {
            let mut row = HashMap::new();
            row.insert("v".to_string(), ColDiff::new(DiffStatus::Stay, "x"));
            if i % 2 == 0 {
                row_diffs1.insert(pk.clone(), row);
            } else {
                row_diffs2.insert(pk.clone(), row);
            }
        }
        TableDiff {
            table_name: "t".to_string(),
            primary_col_name: "id".to_string(),
            primary_values,
            col_names: vec!["v".to_string()],
            row_diffs1,
            row_diffs2,
        }
    }

    #[test]
    fn identity_slice_round_trips() {
        let d = diff_with_rows(10);
        let s = slice(&d, 0, d.row_count());
        assert_eq!(s, d);
    }

    #[test]
    fn slice_preserves_order_and_filters_maps() {
        let d = diff_with_rows(10);
        let s = slice(&d, 3, 6);
        assert_eq!(s.primary_values, vec!["3", "4", "5"]);
        // "4" is even: present in side 1 only. No fabricated entries.
        assert!(s.row_diffs1.contains_key("4"));
        assert!(!s.row_diffs2.contains_key("4"));
        assert!(s.row_diffs2.contains_key("3"));
        assert_eq!(s.row_diffs1.len() + s.row_diffs2.len(), 3);
    }

    #[test]
    fn out_of_range_requests_clamp() {
        let d = diff_with_rows(5);
        assert_eq!(slice(&d, 3, 100).primary_values, vec!["3", "4"]);
        assert!(slice(&d, 10, 20).primary_values.is_empty());
        assert!(slice(&d, 4, 2).primary_values.is_empty());
    }

    #[test]
    fn nav_enabled_states() {
        // First page of 1000 rows, page size 30.
        let nav = PageNav::new(0, 30, 1000);
        assert!(!nav.back_enabled);
        assert!(nav.forward_enabled);

        // Exactly the last full page start.
        let nav = PageNav::new(970, 30, 1000);
        assert!(nav.back_enabled);
        assert!(!nav.forward_enabled);
    }

    #[test]
    fn nav_label_scenario_c() {
        // 1000 rows, page size 30, pageStart 990.
        let nav = PageNav::new(990, 30, 1000);
        assert_eq!(nav.label(), "991 ~ 1,000 of 1,000");
        assert!(!nav.forward_enabled);
        assert!(nav.back_enabled);
    }

    #[test]
    fn nav_handles_small_tables() {
        let nav = PageNav::new(0, 30, 7);
        assert_eq!(nav.label(), "1 ~ 7 of 7");
        assert!(!nav.back_enabled);
        assert!(!nav.forward_enabled);

        let nav = PageNav::new(0, 30, 0);
        assert_eq!(nav.label(), "0 ~ 0 of 0");
    }
}
