#![allow(dead_code)]

use capacity_timeseries::{
    Diagnostic, Market, NormalizationReport, NormalizerConfig, models::RawRow,
    models::TimeseriesBatch, normalize_rows,
};

pub const FCR_VALUE: &str = "GERMANY_SETTLEMENTCAPACITY_PRICE_[EUR/MW]";
pub const MARGINAL_VALUE: &str = "GERMANY_MARGINAL_CAPACITY_PRICE_[(EUR/MW)/h]";

pub fn fcr_row(date: &str, product: &str, value: &str) -> RawRow {
    RawRow::from_pairs([
        ("DATE_FROM", date),
        ("PRODUCTNAME", product),
        (FCR_VALUE, value),
    ])
}

pub fn marginal_row(date: &str, product: &str, value: &str) -> RawRow {
    RawRow::from_pairs([
        ("DATE_FROM", date),
        ("PRODUCT", product),
        (MARGINAL_VALUE, value),
    ])
}

/// Run with default config, collecting diagnostics.
pub fn run(market: &str, rows: &[RawRow]) -> (TimeseriesBatch, NormalizationReport, Vec<Diagnostic>) {
    let mut diags = Vec::new();
    let (batch, report) = normalize_rows(
        &Market::parse(market),
        rows,
        &NormalizerConfig::default(),
        &mut diags,
    );
    (batch, report, diags)
}

pub fn point_count(batch: &TimeseriesBatch) -> usize {
    batch.series.iter().map(|s| s.values.len()).sum()
}

pub fn to_json(batch: &TimeseriesBatch) -> String {
    serde_json::to_string(batch).expect("serialize batch")
}
