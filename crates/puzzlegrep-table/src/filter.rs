//! Predicate filtering over puzzle tables.

use crate::error::TableError;
use crate::table::{self, Table, OPENING_TAGS, RATING, THEMES};

/// Row predicates combined with logical AND.
///
/// Absent fields impose no constraint, so the default criteria pass every
/// row through. Built with the `with_*` methods.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    theme: Option<String>,
    min_rating: Option<i64>,
    max_rating: Option<i64>,
    opening: Option<String>,
}

impl FilterCriteria {
    /// Creates criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only rows whose `Themes` contains `theme`, case-insensitive.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Keep only rows rated at or above `min`.
    pub fn with_min_rating(mut self, min: i64) -> Self {
        self.min_rating = Some(min);
        self
    }

    /// Keep only rows rated at or below `max`.
    pub fn with_max_rating(mut self, max: i64) -> Self {
        self.max_rating = Some(max);
        self
    }

    /// Keep only rows whose `OpeningTags` contains `opening`,
    /// case-insensitive.
    pub fn with_opening(mut self, opening: impl Into<String>) -> Self {
        self.opening = Some(opening.into());
        self
    }

    /// Returns a new table holding exactly the rows that satisfy every
    /// active constraint. Rows are carried over unchanged.
    ///
    /// Columns are resolved only for active constraints: a table without
    /// `OpeningTags` is an error only when the opening filter is set. A
    /// missing cell never matches an active constraint.
    pub fn apply(&self, input: &Table) -> Result<Table, TableError> {
        let theme = match &self.theme {
            Some(t) => Some((input.column_index(THEMES)?, t.to_lowercase())),
            None => None,
        };
        let opening = match &self.opening {
            Some(o) => Some((input.column_index(OPENING_TAGS)?, o.to_lowercase())),
            None => None,
        };
        let rating = if self.min_rating.is_some() || self.max_rating.is_some() {
            Some(input.column_index(RATING)?)
        } else {
            None
        };

        let rows = input
            .rows()
            .iter()
            .filter(|row| {
                let row = row.as_slice();
                if let Some((index, needle)) = &theme {
                    if !contains_ci(row, *index, needle) {
                        return false;
                    }
                }
                if let Some(index) = rating {
                    let value = table::integer_cell(row, index);
                    if let Some(min) = self.min_rating {
                        if !value.is_some_and(|v| v >= min) {
                            return false;
                        }
                    }
                    if let Some(max) = self.max_rating {
                        if !value.is_some_and(|v| v <= max) {
                            return false;
                        }
                    }
                }
                if let Some((index, needle)) = &opening {
                    if !contains_ci(row, *index, needle) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        Ok(input.with_rows(rows))
    }
}

/// Case-insensitive substring test on a text cell. `needle` must already be
/// lowercased; a missing cell never matches.
fn contains_ci(row: &[String], index: usize, needle: &str) -> bool {
    match table::text_cell(row, index) {
        Some(cell) => cell.to_lowercase().contains(needle),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample() -> Table {
        Table::from_rows(
            row(&["Themes", "Rating", "Popularity", "OpeningTags"]),
            vec![
                row(&["mateIn1", "1000", "90", "Italian_Game"]),
                row(&["fork", "1600", "50", "Sicilian_Defense"]),
                row(&["mateIn2", "1400", "70", "Sicilian_Defense"]),
            ],
        )
    }

    #[test]
    fn empty_criteria_pass_everything_through() {
        let table = sample();
        let out = FilterCriteria::new().apply(&table).unwrap();
        assert_eq!(out, table);
    }

    #[test]
    fn theme_match_is_case_insensitive() {
        let table = Table::from_rows(
            row(&["Themes", "Rating"]),
            vec![row(&["MateIn2", "1400"]), row(&["fork", "1600"])],
        );

        let out = FilterCriteria::new().with_theme("mate").apply(&table).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0][0], "MateIn2");
    }

    #[test]
    fn missing_theme_cell_never_matches() {
        let table = Table::from_rows(
            row(&["Themes", "Rating"]),
            vec![row(&["", "1400"]), row(&["endgame", "1600"])],
        );

        let out = FilterCriteria::new().with_theme("end").apply(&table).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0][1], "1600");
    }

    #[test]
    fn min_rating_drops_lower_and_missing_ratings() {
        let table = Table::from_rows(
            row(&["Themes", "Rating"]),
            vec![
                row(&["a", "1000"]),
                row(&["b", "1400"]),
                row(&["c", ""]),
                row(&["d", "1200"]),
            ],
        );

        let out = FilterCriteria::new().with_min_rating(1200).apply(&table).unwrap();
        let themes: Vec<&str> = out.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(themes, ["b", "d"]);
    }

    #[test]
    fn max_rating_drops_higher_ratings() {
        let out = FilterCriteria::new().with_max_rating(1400).apply(&sample()).unwrap();
        let themes: Vec<&str> = out.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(themes, ["mateIn1", "mateIn2"]);
    }

    #[test]
    fn opening_filter_matches_substring() {
        let out = FilterCriteria::new()
            .with_opening("sicilian")
            .apply(&sample())
            .unwrap();
        let themes: Vec<&str> = out.rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(themes, ["fork", "mateIn2"]);
    }

    #[test]
    fn constraints_compose_conjunctively() {
        let out = FilterCriteria::new()
            .with_theme("mate")
            .with_min_rating(1200)
            .apply(&sample())
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0][0], "mateIn2");
    }

    #[test]
    fn columns_are_required_only_when_their_filter_is_active() {
        let table = Table::from_rows(
            row(&["Themes", "Rating"]),
            vec![row(&["mateIn1", "1000"])],
        );

        // No opening filter: the missing OpeningTags column is fine.
        assert!(FilterCriteria::new().with_theme("mate").apply(&table).is_ok());

        let err = FilterCriteria::new()
            .with_opening("Sicilian")
            .apply(&table)
            .unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { ref name } if name == "OpeningTags"));
    }

    #[test]
    fn filtering_does_not_touch_the_input() {
        let table = sample();
        let before = table.clone();
        FilterCriteria::new().with_theme("mate").apply(&table).unwrap();
        assert_eq!(table, before);
    }
}
