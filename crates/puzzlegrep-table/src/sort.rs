//! Sort criteria for puzzle tables.

use std::cmp::Ordering;

use crate::error::TableError;
use crate::table::{self, Table, POPULARITY, RATING};

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// Named sort criterion, each mapping to a column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Highest `Rating` first.
    HighestRated,
    /// Lowest `Rating` first.
    LowestRated,
    /// Highest `Popularity` first.
    MostPopular,
    /// Lowest `Popularity` first.
    LeastPopular,
}

impl SortCriterion {
    /// Every recognized criterion, in CLI help order.
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::HighestRated,
        SortCriterion::LowestRated,
        SortCriterion::MostPopular,
        SortCriterion::LeastPopular,
    ];

    /// Parses a criterion from its CLI code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "highest-rated" => Some(SortCriterion::HighestRated),
            "lowest-rated" => Some(SortCriterion::LowestRated),
            "most-popular" => Some(SortCriterion::MostPopular),
            "least-popular" => Some(SortCriterion::LeastPopular),
            _ => None,
        }
    }

    /// Returns the CLI code.
    pub fn code(&self) -> &'static str {
        match self {
            SortCriterion::HighestRated => "highest-rated",
            SortCriterion::LowestRated => "lowest-rated",
            SortCriterion::MostPopular => "most-popular",
            SortCriterion::LeastPopular => "least-popular",
        }
    }

    /// The column this criterion orders by.
    pub fn column(&self) -> &'static str {
        match self {
            SortCriterion::HighestRated | SortCriterion::LowestRated => RATING,
            SortCriterion::MostPopular | SortCriterion::LeastPopular => POPULARITY,
        }
    }

    /// The direction this criterion orders in.
    pub fn order(&self) -> SortOrder {
        match self {
            SortCriterion::HighestRated | SortCriterion::MostPopular => SortOrder::Descending,
            SortCriterion::LowestRated | SortCriterion::LeastPopular => SortOrder::Ascending,
        }
    }

    /// Returns a new table with rows reordered by this criterion.
    ///
    /// The sort is stable: rows with equal keys keep their input order.
    /// Rows with a missing or non-numeric key order after every row with a
    /// key, in either direction.
    pub fn apply(&self, input: &Table) -> Result<Table, TableError> {
        let index = input.column_index(self.column())?;
        let order = self.order();

        let mut rows = input.rows().to_vec();
        rows.sort_by(|a, b| {
            compare_keys(
                table::integer_cell(a, index),
                table::integer_cell(b, index),
                order,
            )
        });

        Ok(input.with_rows(rows))
    }
}

/// Compares two optional sort keys. Missing keys sink to the end in either
/// direction.
fn compare_keys(a: Option<i64>, b: Option<i64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let cmp = a.cmp(&b);
            match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
