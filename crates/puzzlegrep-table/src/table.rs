//! In-memory puzzle table and CSV round-trip.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::TableError;

/// Column holding the space-separated puzzle theme tags.
pub const THEMES: &str = "Themes";
/// Column holding the puzzle difficulty rating.
pub const RATING: &str = "Rating";
/// Column holding the puzzle popularity score.
pub const POPULARITY: &str = "Popularity";
/// Column holding the space-separated opening tags.
pub const OPENING_TAGS: &str = "OpeningTags";

/// An ordered collection of puzzle rows over a fixed header schema.
///
/// Rows are positional: cell `i` of every row belongs to header column `i`.
/// An empty cell is the missing value; CSV has no other null encoding.
/// Columns the pipeline does not interpret pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from a header schema and rows.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Reads a table from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Reads a table from any CSV source.
    ///
    /// The first record becomes the header schema. A record whose field
    /// count differs from the header is malformed input.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Writes the table as CSV: header row first, then every row, in the
    /// input column order.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TableError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// The header schema.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The rows, in table order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column. The first matching header wins if a name
    /// repeats.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// A new table over the same schema holding the given rows.
    pub(crate) fn with_rows(&self, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: self.headers.clone(),
            rows,
        }
    }
}

/// The cell at `index` as text, treating empty as missing.
pub(crate) fn text_cell(row: &[String], index: usize) -> Option<&str> {
    match row.get(index) {
        Some(cell) if !cell.is_empty() => Some(cell.as_str()),
        _ => None,
    }
}

/// The cell at `index` as an integer. Empty, absent, and unparseable cells
/// are all the missing value.
pub(crate) fn integer_cell(row: &[String], index: usize) -> Option<i64> {
    row.get(index)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
PuzzleId,Rating,Popularity,Themes,OpeningTags
a1,1000,90,mateIn1 short,Italian_Game
b2,1600,50,fork advantage,Sicilian_Defense
";

    #[test]
    fn parses_headers_and_rows() {
        let table = Table::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            table.headers(),
            ["PuzzleId", "Rating", "Popularity", "Themes", "OpeningTags"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][0], "a1");
        assert_eq!(table.rows()[1][3], "fork advantage");
    }

    #[test]
    fn column_index_reports_missing_columns() {
        let table = Table::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.column_index("Rating").unwrap(), 1);

        let err = table.column_index("NbPlays").unwrap_err();
        assert!(matches!(err, TableError::MissingColumn { ref name } if name == "NbPlays"));
    }

    #[test]
    fn ragged_records_are_malformed() {
        let bad = "A,B\n1,2\n3\n";
        assert!(matches!(
            Table::from_csv_reader(bad.as_bytes()),
            Err(TableError::Csv(_))
        ));
    }

    #[test]
    fn csv_round_trip_preserves_column_order() {
        let table = Table::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), SAMPLE);
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let table = Table::from_csv_path(&path).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(matches!(
            Table::from_csv_path(&path),
            Err(TableError::Io(_))
        ));
    }

    #[test]
    fn cells_treat_empty_and_junk_as_missing() {
        let row: Vec<String> = ["1500", "", "abc"].iter().map(|c| c.to_string()).collect();

        assert_eq!(integer_cell(&row, 0), Some(1500));
        assert_eq!(integer_cell(&row, 1), None);
        assert_eq!(integer_cell(&row, 2), None);
        assert_eq!(integer_cell(&row, 9), None);

        assert_eq!(text_cell(&row, 0), Some("1500"));
        assert_eq!(text_cell(&row, 1), None);
        assert_eq!(text_cell(&row, 9), None);
    }
}
