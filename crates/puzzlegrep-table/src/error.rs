//! Puzzle table error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors returned by table loading, filtering, and sorting.
#[derive(Debug, Error, Diagnostic)]
pub enum TableError {
    /// Puzzle file missing, unreadable, or not writable.
    #[error("I/O error: {0}")]
    #[diagnostic(code(puzzlegrep::io_error))]
    Io(#[from] std::io::Error),

    /// Malformed CSV input, or a failed CSV write.
    #[error("CSV error: {0}")]
    #[diagnostic(code(puzzlegrep::csv_error))]
    Csv(#[from] csv::Error),

    /// A column required by a filter or sort is absent from the header.
    #[error("column '{name}' not found in input")]
    #[diagnostic(code(puzzlegrep::missing_column))]
    MissingColumn { name: String },
}

impl TableError {
    /// True when the error is a write to an already-closed pipe.
    ///
    /// Downstream consumers like `head` close stdout early; callers treat
    /// that as a normal end of output rather than a failure.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            TableError::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            TableError::Csv(e) => matches!(
                e.kind(),
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::BrokenPipe
            ),
            TableError::MissingColumn { .. } => false,
        }
    }
}
