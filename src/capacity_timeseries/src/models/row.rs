//! One source row: column header → raw cell, in source column order.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{errors::Error, models::cell::CellValue};

static EMPTY: CellValue = CellValue::Empty;

/// Immutable mapping from column name to raw cell value.
///
/// A column that is not present reads as [`CellValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawRow(IndexMap<String, CellValue>);

impl RawRow {
    /// Build a row from `(column, cell)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Cell under `column`, or [`CellValue::Empty`] if the column is absent.
    pub fn get(&self, column: &str) -> &CellValue {
        self.0.get(column).unwrap_or(&EMPTY)
    }

    /// A row with no columns, or only blank cells, carries nothing.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(CellValue::is_blank)
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Decode a JSON payload into rows.
///
/// `null` is accepted as "no rows"; `null` entries inside the array become
/// empty rows, which the normalizer skips.
pub fn rows_from_json(payload: &str) -> Result<Vec<RawRow>, serde_json::Error> {
    let rows: Option<Vec<Option<RawRow>>> = serde_json::from_str(payload)?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Read a JSON payload of rows from `reader` (a file, stdin, ...).
pub fn read_rows(mut reader: impl std::io::Read) -> Result<Vec<RawRow>, Error> {
    let mut payload = String::new();
    reader.read_to_string(&mut payload)?;
    Ok(rows_from_json(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_reads_empty() {
        let row = RawRow::from_pairs([("DATE_FROM", "2025-03-10")]);
        assert_eq!(row.get("PRODUCT"), &CellValue::Empty);
        assert_eq!(row.get("DATE_FROM"), &CellValue::Text("2025-03-10".into()));
    }

    #[test]
    fn all_blank_row_is_empty() {
        let row = RawRow::from_pairs([("A", ""), ("B", "  ")]);
        assert!(row.is_empty());
        assert_eq!(row.0.len(), 2);
        assert!(RawRow::default().is_empty());
    }

    #[test]
    fn decodes_json_rows_keeping_column_order() {
        let rows = rows_from_json(
            r#"[{"PRODUCT":"NEG_00_04","DATE_FROM":45000,"X":null}, null]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("DATE_FROM"), &CellValue::Number(45000.0));
        assert_eq!(rows[0].get("X"), &CellValue::Empty);
        assert!(rows[1].is_empty());
        let cols: Vec<&String> = rows[0].0.keys().collect();
        assert_eq!(cols, ["PRODUCT", "DATE_FROM", "X"]);
    }

    #[test]
    fn reads_rows_from_reader() {
        let rows = read_rows(&br#"[{"DATE_FROM":"2025-03-10"}]"#[..]).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(matches!(read_rows(&b"[1, 2]"[..]), Err(Error::Payload(_))));
    }

    #[test]
    fn null_payload_is_no_rows() {
        assert!(rows_from_json("null").unwrap().is_empty());
        assert!(rows_from_json("[]").unwrap().is_empty());
        assert!(rows_from_json(r#"{"a":1}"#).is_err());
    }
}
