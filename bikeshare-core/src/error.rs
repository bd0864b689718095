//! Error types for the bikeshare core library.

use std::{io, path::PathBuf};

use thiserror::Error;

/// An error raised while loading a city dataset.
///
/// Every variant names the dataset path so a session can report which file
/// failed; all of them are fatal to the session iteration that triggered the
/// load.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be opened or read.
    #[error("failed to read dataset `{path}`: {source}")]
    Io {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The header or a row failed CSV deserialisation.
    #[error("malformed record in `{path}`: {source}")]
    Csv {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying CSV parse failure.
        #[source]
        source: csv::Error,
    },
    /// A start timestamp could not be parsed.
    #[error("invalid start time `{value}` in record {record} of `{path}`: {source}")]
    Timestamp {
        /// Path of the dataset file.
        path: PathBuf,
        /// 1-based data-row number of the offending record.
        record: usize,
        /// The unparseable timestamp text.
        value: String,
        /// Underlying timestamp parse failure.
        #[source]
        source: chrono::ParseError,
    },
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LoadError>;
