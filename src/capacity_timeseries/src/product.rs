//! Product codes and the series keys derived from them.
//!
//! Grammar (tokens separated by `_`):
//!
//! ```text
//! product_code := TYPE [ "_" HOUR [ "_" REST ]* ]
//! TYPE         := any text without "_"     (may be empty)
//! HOUR         := optionally signed integer (local delivery start hour)
//! ```
//!
//! `POS_12_16` is a positive-direction product starting at hour 12. Codes whose
//! second token is missing or not an integer still produce a key; their hour
//! falls back to 0 and [`HourToken`] records why, so callers can report it.

use crate::market::Market;

/// Country prefix of every series name.
pub const NAME_PREFIX: &str = "de_";

/// State of the hour token of a product code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HourToken {
    /// Second token parsed as an integer.
    Parsed(i32),
    /// There is no second token (or it is empty).
    Missing,
    /// Second token is present but not an integer.
    Invalid(String),
}

impl HourToken {
    /// Hour offset to use; 0 unless the token parsed.
    pub fn offset(&self) -> i32 {
        match self {
            HourToken::Parsed(h) => *h,
            HourToken::Missing | HourToken::Invalid(_) => 0,
        }
    }

    /// `true` when [`HourToken::offset`] is a fallback rather than a parsed value.
    pub fn is_defaulted(&self) -> bool {
        !matches!(self, HourToken::Parsed(_))
    }
}

/// A product code split into its grammar parts.
///
/// The kind is always the text before the first `_`, so a code with a leading
/// underscore has an empty kind: `_12_16` reads as kind `""` at hour 12 and
/// names `de_fcr__settlement_capacity`. It is never kept whole as `_12_16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCode<'a> {
    /// Text before the first `_`, or the whole code.
    pub kind: &'a str,
    /// The hour token.
    pub hour: HourToken,
}

impl<'a> ProductCode<'a> {
    /// Split `code` according to the module grammar.
    pub fn parse(code: &'a str) -> Self {
        let mut tokens = code.split('_');
        let kind = tokens.next().unwrap_or_default();
        let hour = match tokens.next() {
            None | Some("") => HourToken::Missing,
            Some(tok) => tok
                .parse::<i32>()
                .map(HourToken::Parsed)
                .unwrap_or_else(|_| HourToken::Invalid(tok.to_string())),
        };
        Self { kind, hour }
    }
}

/// Canonical series name and the local hour a product starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesKey {
    /// e.g. `de_fcr_pos_settlement_capacity`.
    pub name: String,
    /// Wall-clock hours after local midnight.
    pub hour_offset: i32,
    /// How the hour offset was obtained.
    pub hour: HourToken,
}

impl SeriesKey {
    /// Derive the key of `product_code` traded on `market`.
    pub fn build(market: &Market, product_code: &str) -> Self {
        let code = ProductCode::parse(product_code);
        let name = format!(
            "{NAME_PREFIX}{}_{}{}",
            market.code(),
            code.kind.to_lowercase(),
            market.columns().name_suffix
        );
        Self {
            name,
            hour_offset: code.hour.offset(),
            hour: code.hour,
        }
    }
}
