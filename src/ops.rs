//! File-level orchestration for the three tools. Each operation reads its
//! inputs fully into memory, runs the in-memory pass, and writes a single
//! output workbook. Failures are returned to the caller; there are no
//! retries.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, instrument};

use crate::compare::intersect_first_columns;
use crate::consolidate::{ConsolidateConfig, consolidate};
use crate::error::{Result, ToolError};
use crate::filter::{matching_rows, search_text};
use crate::io::excel_read;
use crate::io::excel_write;
use crate::model::Table;

/// Builds an output file name stamped with the local wall-clock time, for
/// example `processed_20250825_143000.xlsx`.
fn timestamped_name(prefix: &str) -> String {
    format!("{prefix}_{}.xlsx", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Consolidates the rows of `input` and writes the result into `output_dir`
/// as `processed_<timestamp>.xlsx`. Returns the path of the written file.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output_dir = %output_dir.display())
)]
pub fn consolidate_file(
    input: &Path,
    output_dir: &Path,
    config: &ConsolidateConfig,
) -> Result<PathBuf> {
    let table = excel_read::read_table(input)?;
    info!(row_count = table.len(), "read input table");

    let result = consolidate(&table, config);
    debug!(row_count = result.len(), "consolidation finished");

    let output = output_dir.join(timestamped_name("processed"));
    excel_write::write_table(&output, &result)?;
    Ok(output)
}

/// Intersects the first columns of two workbooks and writes the two-column
/// match table to `output`.
#[instrument(
    level = "info",
    skip_all,
    fields(first = %first.display(), second = %second.display(), output = %output.display())
)]
pub fn intersect_files(first: &Path, second: &Path, output: &Path) -> Result<()> {
    let table_first = excel_read::read_table(first)?;
    let table_second = excel_read::read_table(second)?;

    require_columns(&table_first, 2, first)?;
    require_columns(&table_second, 2, second)?;

    let result = intersect_first_columns(&table_first, &table_second);
    info!(match_count = result.len(), "intersection computed");

    excel_write::write_table(output, &result)
}

/// Copies the rows of `input` matching the reference workbook's search cell
/// into `output_dir` as `matches_<timestamp>.xlsx`. Returns `None` without
/// writing a file when nothing matches.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), reference = %reference.display(), output_dir = %output_dir.display())
)]
pub fn filter_file(
    input: &Path,
    reference: &Path,
    output_dir: &Path,
    limit: usize,
) -> Result<Option<PathBuf>> {
    let input_table = excel_read::read_table(input)?;
    let reference_table = excel_read::read_table(reference)?;

    let target = search_text(&reference_table)?;
    debug!(target = %target, "search text extracted");

    let result = matching_rows(&input_table, &target, limit);
    info!(match_count = result.len(), "matching rows collected");

    if result.is_empty() {
        return Ok(None);
    }

    let output = output_dir.join(timestamped_name("matches"));
    excel_write::write_table(&output, &result)?;
    Ok(Some(output))
}

fn require_columns(table: &Table, needed: usize, path: &Path) -> Result<()> {
    if table.width() < needed {
        return Err(ToolError::InvalidWorkbook(format!(
            "{} does not contain at least {needed} columns",
            path.display()
        )));
    }
    Ok(())
}
