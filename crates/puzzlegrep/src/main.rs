//! puzzlegrep CLI — filter and sort a Lichess puzzle CSV.
//!
//! Reads the puzzle file into memory, applies the requested filters and
//! sort, and writes the resulting table as CSV on stdout. Diagnostics go to
//! stderr so the CSV stream stays clean for downstream tools.

use std::path::PathBuf;

use clap::Parser;
use miette::{Result, WrapErr};
use tracing::debug;

use puzzlegrep_table::{FilterCriteria, PuzzleQuery, SortCriterion, Table};

/// Filter and sort a chess puzzle CSV.
#[derive(Parser, Debug)]
#[command(name = "puzzlegrep", version, about = "Filter and sort a Lichess puzzle CSV")]
struct Cli {
    /// Path to a Lichess CSV puzzle file.
    #[arg(value_name = "FILE")]
    csv_file: PathBuf,

    /// Keep puzzles whose themes contain TEXT, case-insensitive (e.g. 'mate').
    #[arg(long, value_name = "TEXT")]
    theme: Option<String>,

    /// Keep puzzles whose opening tags contain TEXT, case-insensitive
    /// (e.g. 'Sicilian').
    #[arg(long = "contains-opening", value_name = "TEXT")]
    contains_opening: Option<String>,

    /// Keep puzzles rated at least INT.
    #[arg(long = "min-rating", value_name = "INT")]
    min_rating: Option<i64>,

    /// Keep puzzles rated at most INT.
    #[arg(long = "max-rating", value_name = "INT")]
    max_rating: Option<i64>,

    /// Sort the output: highest-rated, lowest-rated, most-popular, or
    /// least-popular.
    #[arg(long = "sort-by", value_name = "ORDER", value_parser = parse_sort_criterion)]
    sort_by: Option<SortCriterion>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

/// Boundary parser for `--sort-by`: anything outside the fixed enumeration
/// is an argument error before any file I/O happens.
fn parse_sort_criterion(code: &str) -> std::result::Result<SortCriterion, String> {
    SortCriterion::from_code(code).ok_or_else(|| {
        let codes: Vec<&str> = SortCriterion::ALL.iter().map(|c| c.code()).collect();
        format!("must be one of: {}", codes.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose. Logs go to stderr: stdout is the CSV.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let table = Table::from_csv_path(&cli.csv_file)
        .wrap_err_with(|| format!("failed to load {}", cli.csv_file.display()))?;
    debug!("loaded {} rows from {}", table.len(), cli.csv_file.display());

    let mut criteria = FilterCriteria::new();
    if let Some(theme) = &cli.theme {
        criteria = criteria.with_theme(theme.as_str());
    }
    if let Some(min) = cli.min_rating {
        criteria = criteria.with_min_rating(min);
    }
    if let Some(max) = cli.max_rating {
        criteria = criteria.with_max_rating(max);
    }
    if let Some(opening) = &cli.contains_opening {
        criteria = criteria.with_opening(opening.as_str());
    }

    let mut query = PuzzleQuery::new().with_filter(criteria);
    if let Some(criterion) = cli.sort_by {
        query = query.with_sort(criterion);
    }

    let (result, stats) = query.run(&table)?;
    debug!(
        "{} rows in, {} filtered out, {} rows out",
        stats.input_rows, stats.filtered_rows, stats.output_rows
    );

    // Downstream tools like `head` close the pipe early; that is a normal
    // end of output, not an error.
    let stdout = std::io::stdout();
    if let Err(e) = result.write_csv(stdout.lock()) {
        if e.is_broken_pipe() {
            debug!("stdout closed early, stopping");
            return Ok(());
        }
        return Err(e.into());
    }

    Ok(())
}
