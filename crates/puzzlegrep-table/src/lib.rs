//! Puzzle table filtering and sorting for puzzlegrep.
//!
//! Loads a Lichess puzzle CSV into an in-memory [`Table`], narrows it with
//! [`FilterCriteria`], reorders it with a [`SortCriterion`], and writes the
//! result back out as CSV. Each stage produces a new table; nothing is
//! mutated in place.
//!
//! # Example
//!
//! ```ignore
//! use puzzlegrep_table::{FilterCriteria, PuzzleQuery, SortCriterion, Table};
//!
//! let table = Table::from_csv_path("puzzles.csv")?;
//! let query = PuzzleQuery::new()
//!     .with_filter(FilterCriteria::new().with_theme("mate").with_min_rating(1200))
//!     .with_sort(SortCriterion::HighestRated);
//! let (result, stats) = query.run(&table)?;
//! result.write_csv(std::io::stdout().lock())?;
//! ```

mod error;
mod filter;
mod query;
mod sort;
mod table;

pub use error::TableError;
pub use filter::FilterCriteria;
pub use query::{PuzzleQuery, QueryStats};
pub use sort::{SortCriterion, SortOrder};
pub use table::{Table, OPENING_TAGS, POPULARITY, RATING, THEMES};
