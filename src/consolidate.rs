//! Row consolidation: collapses runs of adjacent rows that share a key into a
//! single row with their numeric columns summed.
//!
//! A run stays open for as long as the accumulated row's sentinel cell is
//! empty. The sentinel of a merged row is taken from the most recent input
//! row, so a row carrying a non-empty sentinel closes its group: the
//! accumulated row is flushed as soon as the next row arrives (or the input
//! ends). Merging only ever happens between a row and its immediate
//! predecessor, never across a gap.

use std::ops::Range;

use crate::model::{Cell, Row, Table, cell_at};

/// Column configuration for a consolidation pass. All indices are 0-based.
#[derive(Debug, Clone)]
pub struct ConsolidateConfig {
    /// Column whose value decides whether two adjacent rows belong together.
    pub key_column: usize,
    /// Column whose emptiness on the accumulated row keeps the group open.
    pub sentinel_column: usize,
    /// Contiguous span of columns summed on merge.
    pub sum_range: Range<usize>,
}

impl Default for ConsolidateConfig {
    fn default() -> Self {
        Self {
            key_column: 0,
            sentinel_column: 10,
            sum_range: 1..9,
        }
    }
}

/// Consolidates adjacent rows of `table` according to `config`.
///
/// The output holds equal or fewer rows than the input and preserves input
/// order. An empty input yields an empty output.
pub fn consolidate(table: &Table, config: &ConsolidateConfig) -> Table {
    let mut output: Vec<Row> = Vec::with_capacity(table.len());
    let mut previous: Option<Row> = None;

    for row in &table.rows {
        if let Some(accumulated) = previous.as_ref() {
            let same_key = cell_at(row, config.key_column)
                .key_eq(cell_at(accumulated, config.key_column));
            let group_open = cell_at(accumulated, config.sentinel_column).is_empty();
            if same_key && group_open {
                previous = Some(merge_rows(accumulated, row, config));
                continue;
            }
            output.push(accumulated.clone());
        }
        previous = Some(row.clone());
    }

    if let Some(accumulated) = previous {
        output.push(accumulated);
    }

    Table::from_rows(output)
}

/// Combines `current` into `previous` under the fixed column-position rule:
/// summed columns add numerically, column 0 keeps the previous row's value,
/// and every remaining column (key, sentinel, and everything after) takes the
/// current row's value.
fn merge_rows(previous: &Row, current: &Row, config: &ConsolidateConfig) -> Row {
    let width = previous.len().max(current.len());
    let mut merged = Vec::with_capacity(width);

    for column in 0..width {
        let cell = if config.sum_range.contains(&column) && column != config.key_column {
            sum_cells(cell_at(previous, column), cell_at(current, column))
        } else if column == 0 && config.key_column != 0 {
            cell_at(previous, column).clone()
        } else {
            cell_at(current, column).clone()
        };
        merged.push(cell);
    }

    merged
}

/// Adds two cells numerically, treating empty or unparsable content as 0.
/// The sum stays integral only when both inputs are integral.
fn sum_cells(lhs: &Cell, rhs: &Cell) -> Cell {
    let total = lhs.numeric_or_zero() + rhs.numeric_or_zero();
    if lhs.is_integral() && rhs.is_integral() {
        // The sum is computed as f64, so integral values beyond 2^53 lose
        // precision before this cast, and out-of-range totals saturate at
        // the i64 bounds.
        Cell::Int(total as i64)
    } else {
        Cell::Float(total)
    }
}
