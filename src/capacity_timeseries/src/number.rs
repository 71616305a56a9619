//! Price coercion. A missing or malformed price is a normal outcome, so every
//! failure maps to `None` instead of an error.

use crate::models::CellValue;

/// Coerce a raw cell into a price.
///
/// - blank cell → `None`
/// - native number → itself
/// - anything else: trimmed text with every `,` replaced by `.`, parsed as `f64`
///
/// Non-finite results (`inf`, `NaN`, ...) are not prices and map to `None`.
pub fn coerce_number(raw: &CellValue) -> Option<f64> {
    match raw {
        CellValue::Number(n) => Some(*n).filter(|v| v.is_finite()),
        other => parse_decimal(&other.as_trimmed_text()?),
    }
}

/// Parse decimal text that may use a comma as the decimal separator.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }
    s.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}
