//! Row filtering against a reference cell.
//!
//! The reference workbook supplies the search text: the cell at row 0,
//! column 2. Every row of the input workbook containing a cell whose cleaned
//! text equals the cleaned search text is copied to the output, up to a match
//! limit. Cleaning collapses whitespace runs to a single space, trims, and
//! lowercases.

use crate::error::{Result, ToolError};
use crate::model::{Cell, Table, cell_at};

/// Column of the reference workbook's first row holding the search text.
pub const REFERENCE_COLUMN: usize = 2;

/// Default cap on the number of matching rows copied to the output.
pub const DEFAULT_MATCH_LIMIT: usize = 6;

/// Collapses internal whitespace, trims, and lowercases.
fn clean_text(cell: &Cell) -> String {
    cell.to_text()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extracts the search text from the reference table.
pub fn search_text(reference: &Table) -> Result<String> {
    let first_row = reference.rows.first().ok_or_else(|| {
        ToolError::InvalidWorkbook("reference workbook has no rows".to_string())
    })?;
    if first_row.len() <= REFERENCE_COLUMN {
        return Err(ToolError::InvalidWorkbook(format!(
            "reference workbook needs at least {} columns in its first row",
            REFERENCE_COLUMN + 1
        )));
    }
    Ok(clean_text(cell_at(first_row, REFERENCE_COLUMN)))
}

/// Copies rows of `input` containing a cell equal to `target` after cleaning,
/// stopping once `limit` rows have matched.
pub fn matching_rows(input: &Table, target: &str, limit: usize) -> Table {
    let mut rows = Vec::new();
    for row in &input.rows {
        if rows.len() >= limit {
            break;
        }
        if row.iter().any(|cell| clean_text(cell) == target) {
            rows.push(row.clone());
        }
    }
    Table::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaning_collapses_whitespace() {
        assert_eq!(
            clean_text(&Cell::Text("  0747\t УО  ".to_string())),
            "0747 уо"
        );
    }
}
