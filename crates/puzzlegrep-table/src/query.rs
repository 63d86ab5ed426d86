//! Composed filter + sort pipeline.

use tracing::debug;

use crate::error::TableError;
use crate::filter::FilterCriteria;
use crate::sort::SortCriterion;
use crate::table::Table;

/// A filter plus an optional sort over a puzzle table.
///
/// The default query passes the table through unchanged.
#[derive(Debug, Clone, Default)]
pub struct PuzzleQuery {
    filter: FilterCriteria,
    sort_by: Option<SortCriterion>,
}

/// Row counts observed while running a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryStats {
    /// Rows in the input table.
    pub input_rows: usize,
    /// Rows dropped by the filter stage.
    pub filtered_rows: usize,
    /// Rows in the output table.
    pub output_rows: usize,
}

impl PuzzleQuery {
    /// Creates a query with no filter and no sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter criteria.
    pub fn with_filter(mut self, filter: FilterCriteria) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the sort criterion.
    pub fn with_sort(mut self, criterion: SortCriterion) -> Self {
        self.sort_by = Some(criterion);
        self
    }

    /// Runs filter then sort, returning the output table and row counts.
    ///
    /// Without a sort criterion the filtered table keeps its original row
    /// order.
    pub fn run(&self, input: &Table) -> Result<(Table, QueryStats), TableError> {
        let input_rows = input.len();

        let filtered = self.filter.apply(input)?;
        let kept = filtered.len();
        debug!("filter kept {kept} of {input_rows} rows");

        let output = match self.sort_by {
            Some(criterion) => {
                debug!("sorting by {}", criterion.code());
                criterion.apply(&filtered)?
            }
            None => filtered,
        };

        Ok((
            output,
            QueryStats {
                input_rows,
                filtered_rows: input_rows - kept,
                output_rows: kept,
            },
        ))
    }
}
