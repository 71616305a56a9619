//! Row batch → named time series.
//!
//! [`normalize_rows`] is the single entry point: it walks the rows in order,
//! coerces the mapped columns, derives the series key and delivery instant,
//! and groups the resulting points. Rows that cannot be placed on a timeline
//! are dropped and reported to the [`DiagnosticSink`]; a bad price only turns
//! the value into `null`.

use crate::{
    aggregate::Aggregator,
    config::NormalizerConfig,
    date::coerce_date,
    diagnostics::{Diagnostic, DiagnosticSink, TracingSink},
    errors::TimestampError,
    market::Market,
    models::{Point, RawRow, TimeseriesBatch},
    number::coerce_number,
    product::{HourToken, SeriesKey},
    timestamp::build_timestamp,
};

/// Per-run counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NormalizationReport {
    /// Rows handed in.
    pub rows_seen: usize,
    /// Rows without any non-blank cell.
    pub rows_empty: usize,
    /// Rows dropped because the date could not be coerced.
    pub rows_bad_date: usize,
    /// Rows dropped because the product code was missing.
    pub rows_missing_product: usize,
    /// Rows dropped because the timestamp was not representable.
    pub rows_bad_timestamp: usize,
    /// Points emitted.
    pub points: usize,
    /// Emitted points whose value is `null`.
    pub null_values: usize,
    /// Points whose hour offset fell back to 0.
    pub hours_defaulted: usize,
}

impl NormalizationReport {
    /// Rows that did not produce a point.
    pub fn rows_dropped(&self) -> usize {
        self.rows_empty + self.rows_bad_date + self.rows_missing_product + self.rows_bad_timestamp
    }
}

/// Normalize `rows` exported for `market`, using the default configuration and
/// logging diagnostics through `tracing`.
pub fn normalize(market: &str, rows: &[RawRow]) -> TimeseriesBatch {
    let (batch, _report) = normalize_rows(
        &Market::parse(market),
        rows,
        &NormalizerConfig::default(),
        &mut TracingSink,
    );
    batch
}

/// Normalize `rows` exported for `market`.
///
/// Every row with a coercible date, a non-blank product code and a representable
/// delivery instant adds exactly one point to the series named by
/// [`SeriesKey::build`]. Series are emitted in first-seen order.
#[tracing::instrument(level = "debug", skip_all, fields(market = %market, rows = rows.len()))]
pub fn normalize_rows(
    market: &Market,
    rows: &[RawRow],
    cfg: &NormalizerConfig,
    sink: &mut dyn DiagnosticSink,
) -> (TimeseriesBatch, NormalizationReport) {
    let columns = market.columns();
    let zone = cfg.reference_zone;
    let mut report = NormalizationReport::default();
    let mut agg = Aggregator::new();

    for (idx, row) in rows.iter().enumerate() {
        report.rows_seen += 1;
        if row.is_empty() {
            report.rows_empty += 1;
            continue;
        }

        let raw_date = row.get(columns.date_column);
        let date = match coerce_date(raw_date, zone) {
            Ok(d) => d,
            Err(e) => {
                report.rows_bad_date += 1;
                sink.record(Diagnostic::UnparseableDate {
                    row: idx,
                    raw: raw_date.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let Some(product) = row.get(columns.product_column).as_trimmed_text() else {
            report.rows_missing_product += 1;
            sink.record(Diagnostic::MissingProduct {
                row: idx,
                column: columns.product_column,
            });
            continue;
        };

        let key = SeriesKey::build(market, &product);
        let ts = match build_timestamp(date, key.hour_offset, zone) {
            Ok(ts) => ts,
            Err(TimestampError::OutOfRange { date, hour_offset }) => {
                report.rows_bad_timestamp += 1;
                sink.record(Diagnostic::TimestampOutOfRange {
                    row: idx,
                    date,
                    hour_offset,
                });
                continue;
            }
        };

        if key.hour.is_defaulted() {
            report.hours_defaulted += 1;
            let token = match &key.hour {
                HourToken::Invalid(tok) => Some(tok.clone()),
                _ => None,
            };
            sink.record(Diagnostic::HourDefaulted {
                row: idx,
                product: product.clone(),
                token,
            });
        }

        let value = coerce_number(row.get(columns.value_column));
        if value.is_none() {
            report.null_values += 1;
        }
        report.points += 1;
        agg.add(&key.name, Point { ts, value });
    }

    let batch = TimeseriesBatch {
        country: cfg.country.clone(),
        series: agg.finish(),
    };
    tracing::debug!(
        series = batch.series.len(),
        points = report.points,
        dropped = report.rows_dropped(),
        "normalized batch"
    );
    (batch, report)
}
