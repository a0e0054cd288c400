use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};
use crate::model::{Cell, Row, Table};

/// Reads the first worksheet of an Excel workbook into a [`Table`]. No header
/// row is assumed: every row, including the first, is data.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no worksheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| {
            ToolError::InvalidWorkbook(format!("missing sheet '{sheet_name}'"))
        })?
        .map_err(ToolError::from)?;

    // calamine anchors the range at the first used cell, not at A1. The
    // offsets must be restored so that configured column indices stay
    // absolute even when leading rows or columns are blank.
    let (start_row, start_col) = match range.start() {
        Some((row, col)) => (row as usize, col as usize),
        None => (0, 0),
    };

    let mut rows: Vec<Row> = Vec::with_capacity(start_row + range.height());
    rows.resize_with(start_row, Row::new);
    for row in range.rows() {
        let mut cells: Row = vec![Cell::Empty; start_col];
        cells.extend(row.iter().map(convert_cell));
        rows.push(cells);
    }

    Ok(Table::from_rows(rows))
}

fn convert_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty => Cell::Empty,
        DataType::String(value) => Cell::Text(value.clone()),
        DataType::Int(value) => Cell::Int(*value),
        DataType::Float(value) => Cell::Float(*value),
        DataType::Bool(value) => Cell::Bool(*value),
        DataType::DateTime(value) => Cell::Float(*value),
        other => Cell::Text(other.to_string()),
    }
}
