use sheet_tools::consolidate::{ConsolidateConfig, consolidate};
use sheet_tools::io::{excel_read, excel_write};
use sheet_tools::model::{Cell, Table};
use sheet_tools::ops;
use tempfile::tempdir;

fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

fn config(key: usize, sentinel: usize, sum: std::ops::Range<usize>) -> ConsolidateConfig {
    ConsolidateConfig {
        key_column: key,
        sentinel_column: sentinel,
        sum_range: sum,
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let table = Table::default();
    let result = consolidate(&table, &ConsolidateConfig::default());
    assert!(result.is_empty());
}

#[test]
fn distinct_adjacent_keys_pass_through_unchanged() {
    let table = Table::from_rows(vec![
        vec![text("A"), Cell::Int(1), Cell::Empty],
        vec![text("B"), Cell::Int(2), Cell::Empty],
        vec![text("A"), Cell::Int(3), Cell::Empty],
    ]);

    let result = consolidate(&table, &config(0, 2, 1..2));
    assert_eq!(result, table);
}

#[test]
fn merging_sums_columns_and_takes_sentinel_from_current_row() {
    let table = Table::from_rows(vec![
        vec![text("A"), Cell::Int(1), Cell::Int(0), text(""), Cell::Int(5)],
        vec![text("A"), Cell::Int(2), Cell::Int(0), text(""), Cell::Int(7)],
    ]);

    let result = consolidate(&table, &config(0, 3, 1..3));

    let expected = Table::from_rows(vec![vec![
        text("A"),
        Cell::Int(3),
        Cell::Int(0),
        text(""),
        Cell::Int(7),
    ]]);
    assert_eq!(result, expected);
}

#[test]
fn unparsable_cells_contribute_zero_to_the_sum() {
    let table = Table::from_rows(vec![
        vec![text("A"), text("n/a"), Cell::Float(1.5), Cell::Empty],
        vec![text("A"), Cell::Float(4.0), text("oops"), Cell::Empty],
    ]);

    let result = consolidate(&table, &config(0, 3, 1..3));

    assert_eq!(result.len(), 1);
    assert_eq!(result.rows[0][1], Cell::Float(4.0));
    assert_eq!(result.rows[0][2], Cell::Float(1.5));
}

#[test]
fn integral_sums_stay_integral_and_fractional_sums_stay_float() {
    let table = Table::from_rows(vec![
        vec![text("A"), Cell::Int(2), Cell::Float(1.0), Cell::Empty],
        vec![text("A"), Cell::Int(3), Cell::Int(2), Cell::Empty],
    ]);

    let result = consolidate(&table, &config(0, 3, 1..3));

    assert_eq!(result.rows[0][1], Cell::Int(5));
    assert_eq!(result.rows[0][2], Cell::Float(3.0));
}

#[test]
fn chain_collapses_to_single_row_with_totals() {
    let table = Table::from_rows(vec![
        vec![text("A"), Cell::Int(1), Cell::Empty],
        vec![text("A"), Cell::Int(2), Cell::Empty],
        vec![text("A"), Cell::Int(3), Cell::Empty],
        vec![text("A"), Cell::Int(4), text("done")],
    ]);

    let result = consolidate(&table, &config(0, 2, 1..2));

    let expected = Table::from_rows(vec![vec![text("A"), Cell::Int(10), text("done")]]);
    assert_eq!(result, expected);
}

#[test]
fn non_empty_sentinel_mid_chain_splits_the_group() {
    let table = Table::from_rows(vec![
        vec![text("A"), Cell::Int(1), Cell::Empty],
        vec![text("A"), Cell::Int(2), text("stop")],
        vec![text("A"), Cell::Int(3), Cell::Empty],
        vec![text("A"), Cell::Int(4), Cell::Empty],
    ]);

    let result = consolidate(&table, &config(0, 2, 1..2));

    let expected = Table::from_rows(vec![
        vec![text("A"), Cell::Int(3), text("stop")],
        vec![text("A"), Cell::Int(7), Cell::Empty],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn rows_shorter_than_the_configured_columns_do_not_panic() {
    let table = Table::from_rows(vec![
        vec![text("A"), Cell::Int(1)],
        vec![text("A")],
        vec![text("A"), Cell::Int(2), Cell::Int(3), text("close")],
    ]);

    let result = consolidate(&table, &config(0, 3, 1..3));

    let expected = Table::from_rows(vec![vec![
        text("A"),
        Cell::Float(3.0),
        Cell::Float(3.0),
        text("close"),
    ]]);
    assert_eq!(result, expected);
}

#[test]
fn first_column_comes_from_the_previous_row_when_keyed_elsewhere() {
    let table = Table::from_rows(vec![
        vec![text("first"), text("K"), Cell::Int(1), Cell::Empty],
        vec![text("second"), text("K"), Cell::Int(2), text("x")],
    ]);

    let result = consolidate(&table, &config(1, 3, 2..3));

    let expected = Table::from_rows(vec![vec![
        text("first"),
        text("K"),
        Cell::Int(3),
        text("x"),
    ]]);
    assert_eq!(result, expected);
}

#[test]
fn consolidate_file_keeps_column_indices_absolute_with_blank_leading_columns() {
    let temp_dir = tempdir().expect("temporary directory");
    let input_path = temp_dir.path().join("input.xlsx");

    // Column 0 is never written, so the workbook's used range starts at
    // column 1. The configured indices must still address the same columns.
    let table = Table::from_rows(vec![
        vec![Cell::Empty, text("A"), Cell::Float(1.0), Cell::Empty],
        vec![Cell::Empty, text("A"), Cell::Float(2.0), text("done")],
    ]);
    excel_write::write_table(&input_path, &table).expect("input written");

    let output_path = ops::consolidate_file(&input_path, temp_dir.path(), &config(1, 3, 2..3))
        .expect("consolidation run");

    let result = excel_read::read_table(&output_path).expect("output read");
    assert_eq!(result.len(), 1);
    assert_eq!(result.rows[0][1], text("A"));
    assert_eq!(result.rows[0][2], Cell::Float(3.0));
    assert_eq!(result.rows[0][3], text("done"));
}

#[test]
fn consolidate_file_writes_a_timestamped_workbook() {
    let temp_dir = tempdir().expect("temporary directory");
    let input_path = temp_dir.path().join("input.xlsx");

    let table = Table::from_rows(vec![
        vec![text("A"), Cell::Float(1.0), Cell::Empty],
        vec![text("A"), Cell::Float(2.0), text("done")],
        vec![text("B"), Cell::Float(5.0), Cell::Empty],
    ]);
    excel_write::write_table(&input_path, &table).expect("input written");

    let output_path = ops::consolidate_file(&input_path, temp_dir.path(), &config(0, 2, 1..2))
        .expect("consolidation run");

    let file_name = output_path
        .file_name()
        .and_then(|name| name.to_str())
        .expect("output file name");
    assert!(file_name.starts_with("processed_"));
    assert!(file_name.ends_with(".xlsx"));

    let result = excel_read::read_table(&output_path).expect("output read");
    let expected = Table::from_rows(vec![
        vec![text("A"), Cell::Float(3.0), text("done")],
        vec![text("B"), Cell::Float(5.0), Cell::Empty],
    ]);
    assert_eq!(result, expected);
}
