use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sheet_tools::consolidate::ConsolidateConfig;
use sheet_tools::filter::DEFAULT_MATCH_LIMIT;
use sheet_tools::ops;
use sheet_tools::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Consolidate(args) => execute_consolidate(args),
        Command::Intersect(args) => execute_intersect(args),
        Command::Filter(args) => execute_filter(args),
    }
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn execute_consolidate(args: ConsolidateArgs) -> Result<()> {
    require_input(&args.input)?;

    let config = ConsolidateConfig {
        key_column: args.key_column,
        sentinel_column: args.sentinel_column,
        sum_range: args.sum_from..args.sum_to,
    };

    let output = ops::consolidate_file(&args.input, &args.output_dir, &config)?;
    println!("consolidated table written to {}", output.display());
    Ok(())
}

fn execute_intersect(args: IntersectArgs) -> Result<()> {
    require_input(&args.first)?;
    require_input(&args.second)?;

    ops::intersect_files(&args.first, &args.second, &args.output)?;
    println!("match table written to {}", args.output.display());
    Ok(())
}

fn execute_filter(args: FilterArgs) -> Result<()> {
    require_input(&args.input)?;
    require_input(&args.reference)?;

    match ops::filter_file(&args.input, &args.reference, &args.output_dir, args.limit)? {
        Some(output) => println!("matching rows written to {}", output.display()),
        None => println!("no matching rows found"),
    }
    Ok(())
}

fn require_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare and consolidate rows across Excel workbooks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge adjacent rows sharing a key column, summing numeric columns.
    Consolidate(ConsolidateArgs),
    /// Pair up rows of two workbooks whose first columns match.
    Intersect(IntersectArgs),
    /// Copy rows containing a cell matching the reference workbook's search text.
    Filter(FilterArgs),
}

#[derive(clap::Args)]
struct ConsolidateArgs {
    /// Input workbook path.
    #[arg(long)]
    input: PathBuf,

    /// Directory receiving the processed_<timestamp>.xlsx output.
    #[arg(long)]
    output_dir: PathBuf,

    /// 0-based index of the column adjacent rows are grouped on.
    #[arg(long, default_value_t = 0)]
    key_column: usize,

    /// 0-based index of the column whose emptiness keeps a group open.
    #[arg(long, default_value_t = 10)]
    sentinel_column: usize,

    /// First column of the summed span (inclusive, 0-based).
    #[arg(long, default_value_t = 1)]
    sum_from: usize,

    /// End of the summed span (exclusive, 0-based).
    #[arg(long, default_value_t = 9)]
    sum_to: usize,
}

#[derive(clap::Args)]
struct IntersectArgs {
    /// First workbook path.
    #[arg(long)]
    first: PathBuf,

    /// Second workbook path.
    #[arg(long)]
    second: PathBuf,

    /// Output workbook path.
    #[arg(long)]
    output: PathBuf,
}

#[derive(clap::Args)]
struct FilterArgs {
    /// Workbook whose rows are scanned.
    #[arg(long)]
    input: PathBuf,

    /// Workbook providing the search text in its first row, third column.
    #[arg(long)]
    reference: PathBuf,

    /// Directory receiving the matches_<timestamp>.xlsx output.
    #[arg(long)]
    output_dir: PathBuf,

    /// Maximum number of matching rows to copy.
    #[arg(long, default_value_t = DEFAULT_MATCH_LIMIT)]
    limit: usize,
}
