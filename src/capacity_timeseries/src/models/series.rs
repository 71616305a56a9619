//! Canonical output shapes: points, named series and the emitted batch.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::tz::to_rfc3339_secs;

/// One timestamped price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    /// Delivery start (UTC), serialized as `YYYY-MM-DDTHH:MM:SSZ`.
    #[serde(serialize_with = "serialize_instant")]
    pub ts: DateTime<Utc>,
    /// Price; `None` when the source cell was blank or not a number.
    pub value: Option<f64>,
}

/// A named, ordered sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Canonical series name, e.g. `de_fcr_pos_settlement_capacity`.
    pub name: String,
    /// Points in source row order.
    pub values: Vec<Point>,
}

/// Result of one normalization run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeseriesBatch {
    /// Country tag carried next to the series (e.g. `"de"`).
    pub country: String,
    /// Series in first-occurrence order.
    pub series: Vec<Series>,
}

fn serialize_instant<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_rfc3339_secs(*ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn point_serializes_instant_with_z_and_null_value() {
        let p = Point {
            ts: Utc.with_ymd_and_hms(2025, 3, 10, 11, 0, 0).unwrap(),
            value: None,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"ts":"2025-03-10T11:00:00Z","value":null}"#);
    }

    #[test]
    fn batch_carries_country_next_to_series() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let batch = TimeseriesBatch {
            country: "de".into(),
            series: vec![
                Series {
                    name: "a".into(),
                    values: vec![Point { ts, value: Some(1.0) }, Point { ts, value: None }],
                },
                Series {
                    name: "b".into(),
                    values: vec![Point { ts, value: Some(2.5) }],
                },
            ],
        };
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["country"], "de");
        assert_eq!(json["series"][0]["name"], "a");
        assert_eq!(json["series"][0]["values"][1]["value"], serde_json::Value::Null);
        assert_eq!(json["series"][1]["values"][0]["value"], 2.5);
    }
}
