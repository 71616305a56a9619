//! Row-level diagnostics.
//!
//! Dropped rows and defaulted hours never show up in the emitted series. A
//! [`DiagnosticSink`] lets the caller decide whether they are logged
//! ([`TracingSink`]), collected (`Vec<Diagnostic>`), or ignored ([`NullSink`]).

use std::fmt;

use chrono::NaiveDate;

/// Something noteworthy that happened to one input row.
///
/// `row` is the zero-based position of the row in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The date cell could not be coerced; the row was dropped.
    UnparseableDate {
        /// Row index.
        row: usize,
        /// Raw cell text.
        raw: String,
        /// Coercion error message.
        reason: String,
    },
    /// The product column is missing or blank; the row was dropped.
    MissingProduct {
        /// Row index.
        row: usize,
        /// Column that was read.
        column: &'static str,
    },
    /// The product code has no usable hour token; hour 0 was used.
    HourDefaulted {
        /// Row index.
        row: usize,
        /// Full product code.
        product: String,
        /// Offending token, `None` when absent.
        token: Option<String>,
    },
    /// Date plus hour offset is not representable; the row was dropped.
    TimestampOutOfRange {
        /// Row index.
        row: usize,
        /// Local date.
        date: NaiveDate,
        /// Hour offset from the product code.
        hour_offset: i32,
    },
}

impl Diagnostic {
    /// Row index the diagnostic refers to.
    pub fn row(&self) -> usize {
        match self {
            Diagnostic::UnparseableDate { row, .. }
            | Diagnostic::MissingProduct { row, .. }
            | Diagnostic::HourDefaulted { row, .. }
            | Diagnostic::TimestampOutOfRange { row, .. } => *row,
        }
    }

    /// `true` when the row produced no point.
    pub fn drops_row(&self) -> bool {
        !matches!(self, Diagnostic::HourDefaulted { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnparseableDate { row, raw, reason } => {
                write!(f, "row {row}: skipping, unparseable date {raw:?} ({reason})")
            }
            Diagnostic::MissingProduct { row, column } => {
                write!(f, "row {row}: skipping, missing {column}")
            }
            Diagnostic::HourDefaulted {
                row,
                product,
                token: Some(tok),
            } => write!(f, "row {row}: hour token {tok:?} of {product:?} is not a number, using 0"),
            Diagnostic::HourDefaulted {
                row,
                product,
                token: None,
            } => write!(f, "row {row}: product {product:?} has no hour token, using 0"),
            Diagnostic::TimestampOutOfRange {
                row,
                date,
                hour_offset,
            } => write!(
                f,
                "row {row}: skipping, hour {hour_offset} of {date} is out of range"
            ),
        }
    }
}

/// Receiver of row diagnostics.
pub trait DiagnosticSink {
    /// Handle one diagnostic.
    fn record(&mut self, diagnostic: Diagnostic);
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _diagnostic: Diagnostic) {}
}

/// Logs dropped rows at `warn` and defaulted hours at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        if diagnostic.drops_row() {
            tracing::warn!(row = diagnostic.row(), "{diagnostic}");
        } else {
            tracing::debug!(row = diagnostic.row(), "{diagnostic}");
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
