//! No-Diff Column Detector.

use std::collections::HashSet;

use crate::domain::{ColName, DiffStatus, TableDiff};

/// Returns the columns showing no differences anywhere in the table.
///
/// A column qualifies iff every cell stored for it, across all rows of both
/// snapshot sides, has status `Stay`. Columns with zero cells anywhere are
/// vacuously included. Callers must evaluate this over the full table, not
/// a page slice, so hidden columns stay stable across page changes.
pub fn no_diff_columns(diff: &TableDiff) -> HashSet<ColName> {
    diff.col_names
        .iter()
        .filter(|col| {
            diff.cells_for_col(col)
                .all(|cell| cell.status == DiffStatus::Stay)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::domain::ColDiff;

    use super::*;

    fn diff(cells1: &[(&str, &str, DiffStatus)], cells2: &[(&str, &str, DiffStatus)]) -> TableDiff {
        let mut build = |cells: &[(&str, &str, DiffStatus)]| {
            let mut rows: HashMap<String, HashMap<String, ColDiff>> = HashMap::new();
            for &(pk, col, status) in cells {
                rows.entry(pk.to_string())
                    .or_default()
                    .insert(col.to_string(), ColDiff::new(status, "v"));
            }
            rows
        };
        let row_diffs1 = build(cells1);
        let row_diffs2 = build(cells2);
        let mut col_names: Vec<String> = row_diffs1
            .values()
            .chain(row_diffs2.values())
            .flat_map(|r| r.keys().cloned())
            .collect();
        col_names.sort();
        col_names.dedup();
        let mut primary_values: Vec<String> = row_diffs1
            .keys()
            .chain(row_diffs2.keys())
            .cloned()
            .collect();
        primary_values.sort();
        primary_values.dedup();
        TableDiff {
            table_name: "t".to_string(),
            primary_col_name: "id".to_string(),
            primary_values,
            col_names,
            row_diffs1,
            row_diffs2,
        }
    }

    #[test]
    fn all_stay_column_is_included() {
        let d = diff(
            &[("1", "a", DiffStatus::Stay), ("2", "a", DiffStatus::Stay)],
            &[("1", "a", DiffStatus::Stay), ("2", "a", DiffStatus::Stay)],
        );
        assert!(no_diff_columns(&d).contains("a"));
    }

    #[test]
    fn single_added_cell_excludes_column() {
        let d = diff(
            &[("1", "a", DiffStatus::Stay)],
            &[("1", "a", DiffStatus::Stay), ("2", "a", DiffStatus::Added)],
        );
        assert!(!no_diff_columns(&d).contains("a"));
    }

    #[test]
    fn single_deleted_cell_excludes_column() {
        let d = diff(
            &[("1", "a", DiffStatus::Deleted)],
            &[("1", "b", DiffStatus::Stay)],
        );
        let set = no_diff_columns(&d);
        assert!(!set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn column_with_no_cells_is_vacuously_included() {
        let mut d = diff(&[("1", "a", DiffStatus::Stay)], &[]);
        d.col_names.push("ghost".to_string());
        assert!(no_diff_columns(&d).contains("ghost"));
    }

    #[test]
    fn none_status_cell_excludes_column() {
        let d = diff(
            &[("1", "a", DiffStatus::Stay), ("2", "a", DiffStatus::None)],
            &[],
        );
        assert!(!no_diff_columns(&d).contains("a"));
    }
}
