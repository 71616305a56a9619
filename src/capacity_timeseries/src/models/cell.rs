//! A single spreadsheet cell as handed over by a row source.
//!
//! Row sources come in two flavours: ones that keep the native cell type
//! (numbers, booleans, dates) and ones that render every cell to the text a
//! spreadsheet would display. [`CellValue`] covers both so the coercers can
//! treat them uniformly.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Raw cell content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum CellValue {
    /// Missing or blank cell.
    Empty,
    /// Boolean cell.
    Bool(bool),
    /// Numeric cell (spreadsheets store every number as `f64`).
    Number(f64),
    /// Text cell, including display-rendered numbers and dates.
    Text(String),
    /// Date-formatted cell, already resolved to an instant.
    DateTime(DateTime<Utc>),
}

impl CellValue {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Bool(_) => "boolean",
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "text",
            CellValue::DateTime(_) => "date",
        }
    }

    /// `true` for [`CellValue::Empty`] and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Trimmed textual form, or `None` when the cell is blank.
    pub fn as_trimmed_text(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        Some(self.to_string().trim().to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => n
                .as_f64()
                .map(CellValue::Number)
                .unwrap_or_else(|| CellValue::Text(n.to_string())),
            Value::String(s) => CellValue::Text(s),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(dt: DateTime<Utc>) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_values_map_to_cells() {
        assert_eq!(CellValue::from(json!(null)), CellValue::Empty);
        assert_eq!(CellValue::from(json!(true)), CellValue::Bool(true));
        assert_eq!(CellValue::from(json!(45000)), CellValue::Number(45000.0));
        assert_eq!(CellValue::from(json!("3,50")), CellValue::Text("3,50".into()));
        assert_eq!(
            CellValue::from(json!([1, 2])),
            CellValue::Text("[1,2]".into())
        );
    }

    #[test]
    fn blank_detection() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("  \t".into()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn trimmed_text_of_number_and_text() {
        assert_eq!(CellValue::Number(3.5).as_trimmed_text().as_deref(), Some("3.5"));
        assert_eq!(
            CellValue::Text("  POS_12_16 ".into()).as_trimmed_text().as_deref(),
            Some("POS_12_16")
        );
        assert_eq!(CellValue::Text(" ".into()).as_trimmed_text(), None);
    }
}
