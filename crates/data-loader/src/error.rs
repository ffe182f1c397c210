//! Error types for the data-loader crate.
//!
//! Only a handful of conditions ever leave this crate. Malformed rows are
//! not among them: the parser drops those locally and counts them in the
//! [`LoadReport`](crate::corpus::LoadReport).

use thiserror::Error;

/// Errors that can occur while loading the draw corpus
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// None of the configured draw files exist
    ///
    /// This is the one failure callers are expected to handle distinctly
    /// from a successful-but-empty result.
    #[error("No draw data available: none of {searched} configured sources could be found")]
    DataUnavailable { searched: usize },

    /// I/O error occurred while reading an existing file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader failed on an existing file (bad header, broken quoting)
    #[error("CSV error in {file}: {source}")]
    CsvError {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
