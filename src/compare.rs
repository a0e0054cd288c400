//! Cross-file matching on a single column.
//!
//! Two workbooks are compared on their first columns. Values are normalized
//! by stripping all whitespace and lowercasing, the two normalized sets are
//! intersected, and the rows of each file whose normalized value falls in the
//! intersection contribute their original (un-normalized) value to the
//! result. The output is a two-column table pairing the surviving values of
//! the first file with those of the second, padded with empty cells when one
//! side has more matches than the other.

use std::collections::HashSet;

use crate::model::{Cell, Table, cell_at};

/// Strips all whitespace and lowercases, so `"AB 12"` and `"ab12"` compare
/// equal.
fn normalize_key(cell: &Cell) -> String {
    cell.to_text()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Builds the intersection table of the first columns of `first` and
/// `second`.
pub fn intersect_first_columns(first: &Table, second: &Table) -> Table {
    let keys_first: HashSet<String> = first
        .rows
        .iter()
        .map(|row| normalize_key(cell_at(row, 0)))
        .collect();
    let keys_second: HashSet<String> = second
        .rows
        .iter()
        .map(|row| normalize_key(cell_at(row, 0)))
        .collect();

    let common: HashSet<&String> = keys_first.intersection(&keys_second).collect();

    let matches_first = matching_values(first, &common);
    let matches_second = matching_values(second, &common);

    let height = matches_first.len().max(matches_second.len());
    let mut rows = Vec::with_capacity(height);
    for index in 0..height {
        rows.push(vec![
            matches_first.get(index).cloned().unwrap_or(Cell::Empty),
            matches_second.get(index).cloned().unwrap_or(Cell::Empty),
        ]);
    }

    Table::from_rows(rows)
}

fn matching_values(table: &Table, common: &HashSet<&String>) -> Vec<Cell> {
    table
        .rows
        .iter()
        .map(|row| cell_at(row, 0))
        .filter(|cell| common.contains(&normalize_key(cell)))
        .cloned()
        .collect()
}
