//! Normalization of spreadsheet-exported capacity-market rows into named,
//! UTC-stamped time series.
//!
//! ```
//! use capacity_timeseries::{models::RawRow, normalize};
//!
//! let row = RawRow::from_pairs([
//!     ("DATE_FROM", "2025-03-10"),
//!     ("PRODUCTNAME", "POS_12_16"),
//!     ("GERMANY_SETTLEMENTCAPACITY_PRICE_[EUR/MW]", "3,50"),
//! ]);
//! let batch = normalize("fcr", &[row]);
//! assert_eq!(batch.series[0].name, "de_fcr_pos_settlement_capacity");
//! assert_eq!(batch.series[0].values[0].value, Some(3.5));
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod config;
pub mod date;
pub mod diagnostics;
pub mod errors;
pub mod market;
pub mod models;
pub mod normalize;
pub mod number;
pub mod product;
pub mod timestamp;
pub mod tz;

pub use config::NormalizerConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use errors::Error;
pub use market::Market;
pub use normalize::{NormalizationReport, normalize, normalize_rows};
