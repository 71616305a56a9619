//! Error types for the `capacity_timeseries` crate.

use thiserror::Error;

/// Why a raw cell could not be turned into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateCoerceError {
    /// The cell was absent, empty, or only whitespace.
    #[error("date cell is blank")]
    Blank,

    /// The text matched none of the accepted date or timestamp shapes.
    #[error("unrecognized date text: {0:?}")]
    Unrecognized(String),

    /// A spreadsheet serial day count that lands outside the supported calendar.
    #[error("spreadsheet serial day {0} is out of range")]
    SerialOutOfRange(i64),

    /// The cell holds a kind of value that never encodes a date (e.g. a boolean).
    #[error("{0} cell cannot hold a date")]
    UnsupportedCell(&'static str),
}

/// Failure to turn a local date and hour into an absolute instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The local date plus hour offset has no instant on the representable timeline.
    #[error("hour offset {hour_offset} on {date} is out of range")]
    OutOfRange {
        /// Local calendar date.
        date: chrono::NaiveDate,
        /// Wall-clock hours added to local midnight.
        hour_offset: i32,
    },
}

/// Errors in the normalizer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The reference zone is not a known IANA zone name.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    /// The country tag is empty after trimming.
    #[error("country tag cannot be empty")]
    EmptyCountry,
}

/// The unified error type for the `capacity_timeseries` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The row payload was not a JSON array of objects.
    #[error("Invalid row payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
