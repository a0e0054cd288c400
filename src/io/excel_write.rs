use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::model::{Cell, Table};

/// Writes the table to the given path as a single-sheet Excel workbook with
/// no header row.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let row_idx = row_idx as u32;
            let col_idx = col_idx as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(value) => {
                    worksheet.write_string(row_idx, col_idx, value)?;
                }
                Cell::Int(value) => {
                    worksheet.write_number(row_idx, col_idx, *value as f64)?;
                }
                Cell::Float(value) => {
                    worksheet.write_number(row_idx, col_idx, *value)?;
                }
                Cell::Bool(value) => {
                    worksheet.write_boolean(row_idx, col_idx, *value)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
