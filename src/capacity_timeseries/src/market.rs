//! Capacity markets and the fixed column layout each one is exported with.
//!
//! FCR exports carry settlement prices under `PRODUCTNAME`; every other market
//! (aFRR, mFRR, ...) carries marginal prices under `PRODUCT`.

use std::{fmt, str::FromStr};

/// Column holding the delivery date, shared by all markets.
pub const DATE_COLUMN: &str = "DATE_FROM";

/// Where a market keeps its fields, and the suffix of the series it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Delivery date column.
    pub date_column: &'static str,
    /// Product code column.
    pub product_column: &'static str,
    /// Price column.
    pub value_column: &'static str,
    /// Appended to every series name of this market.
    pub name_suffix: &'static str,
}

/// Column layout of FCR exports.
pub const FCR_COLUMNS: ColumnMapping = ColumnMapping {
    date_column: DATE_COLUMN,
    product_column: "PRODUCTNAME",
    value_column: "GERMANY_SETTLEMENTCAPACITY_PRICE_[EUR/MW]",
    name_suffix: "_settlement_capacity",
};

/// Column layout of every non-FCR export.
pub const MARGINAL_COLUMNS: ColumnMapping = ColumnMapping {
    date_column: DATE_COLUMN,
    product_column: "PRODUCT",
    value_column: "GERMANY_MARGINAL_CAPACITY_PRICE_[(EUR/MW)/h]",
    name_suffix: "_marginal_capacity",
};

/// A capacity market identifier, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Market {
    /// Frequency Containment Reserve.
    Fcr,
    /// Any other market, stored lowercased (e.g. `"afrr"`).
    Other(String),
}

impl Market {
    /// Parse an identifier. Never fails: unknown names select the marginal layout.
    pub fn parse(id: &str) -> Self {
        let id = id.to_lowercase();
        if id == "fcr" { Market::Fcr } else { Market::Other(id) }
    }

    /// Lowercased identifier as it appears in series names.
    pub fn code(&self) -> &str {
        match self {
            Market::Fcr => "fcr",
            Market::Other(id) => id,
        }
    }

    /// Column layout for this market.
    pub fn columns(&self) -> &'static ColumnMapping {
        match self {
            Market::Fcr => &FCR_COLUMNS,
            Market::Other(_) => &MARGINAL_COLUMNS,
        }
    }
}

impl FromStr for Market {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Market::parse(s))
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fcr_is_case_insensitive() {
        assert_eq!(Market::parse("FCR"), Market::Fcr);
        assert_eq!(Market::parse("Fcr").columns(), &FCR_COLUMNS);
    }

    #[test]
    fn other_markets_are_lowercased_and_use_marginal_columns() {
        let m = Market::parse("aFRR");
        assert_eq!(m, Market::Other("afrr".into()));
        assert_eq!(m.code(), "afrr");
        assert_eq!(m.columns().product_column, "PRODUCT");
        assert_eq!(m.columns().name_suffix, "_marginal_capacity");
    }

    #[test]
    fn empty_identifier_is_an_other_market() {
        let m: Market = "".parse().unwrap();
        assert_eq!(m.code(), "");
        assert_eq!(m.columns(), &MARGINAL_COLUMNS);
    }
}
