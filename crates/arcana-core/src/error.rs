use std::path::PathBuf;

/// Alias for `Result<T, DeckError>`.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur when loading or querying a deck.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// The card table could not be read from disk.
    #[error("cannot read card table {path}: {source}")]
    Io {
        /// The file that failed to open or read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The card table is not valid CSV.
    #[error("malformed card table: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("card table is missing required column \"{0}\"")]
    MissingColumn(String),

    /// A `sequence` cell does not hold an integer.
    #[error("row {row}: sequence \"{value}\" is not an integer")]
    InvalidSequence {
        /// 1-based data row number (the header is row 0).
        row: usize,
        /// The offending cell content.
        value: String,
    },

    /// A lookup did not match any card.
    #[error("card not found: \"{0}\"")]
    NotFound(String),
}

impl DeckError {
    /// Returns true if this error means the card table itself is unusable.
    ///
    /// Load errors are fatal at startup; [`DeckError::NotFound`] is an
    /// ordinary lookup miss.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}
