//! Date coercion: any raw `DATE_FROM` cell → calendar date in the reference zone.
//!
//! Resolution order:
//! 1. Native date cells are projected into the reference zone.
//! 2. Numbers are spreadsheet serial days counted from 1899-12-30. The historic
//!    1900 leap-year quirk is kept so dates match what the spreadsheet displays.
//! 3. Text is trimmed and cut at the first `T`; the head is tried against
//!    [`DATE_PATTERNS`] in order. Ambiguous numeric forms are always day-first.
//! 4. The whole text is tried as an offset-aware timestamp, then as a local one.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::{errors::DateCoerceError, models::CellValue};

/// A fixed-width date layout.
///
/// `shape` is matched character by character before parsing: `9` stands for any
/// ASCII digit, every other character must match literally.
#[derive(Debug, Clone, Copy)]
pub struct DatePattern {
    /// Human-readable layout, e.g. `dd/MM/yyyy`.
    pub layout: &'static str,
    shape: &'static str,
    chrono_fmt: &'static str,
}

impl DatePattern {
    const fn new(layout: &'static str, shape: &'static str, chrono_fmt: &'static str) -> Self {
        Self {
            layout,
            shape,
            chrono_fmt,
        }
    }

    fn matches_shape(&self, s: &str) -> bool {
        s.len() == self.shape.len()
            && s.bytes().zip(self.shape.bytes()).all(|(c, p)| match p {
                b'9' => c.is_ascii_digit(),
                lit => c == lit,
            })
    }

    /// Parse `s` if it has exactly this layout and names a real calendar day.
    pub fn parse(&self, s: &str) -> Option<NaiveDate> {
        if !self.matches_shape(s) {
            return None;
        }
        NaiveDate::parse_from_str(s, self.chrono_fmt).ok()
    }
}

/// Accepted date-only layouts, in the order they are tried.
pub const DATE_PATTERNS: [DatePattern; 6] = [
    DatePattern::new("yyyy-MM-dd", "9999-99-99", "%Y-%m-%d"),
    DatePattern::new("dd/MM/yyyy", "99/99/9999", "%d/%m/%Y"),
    DatePattern::new("dd.MM.yyyy", "99.99.9999", "%d.%m.%Y"),
    DatePattern::new("dd-MM-yyyy", "99-99-9999", "%d-%m-%Y"),
    DatePattern::new("yyyy/MM/dd", "9999/99/99", "%Y/%m/%d"),
    DatePattern::new("yyyyMMdd", "99999999", "%Y%m%d"),
];

/// Local ISO timestamp layouts tried after the offset-aware ones.
const LOCAL_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Offset-aware layouts tried after RFC 3339 (which requires seconds).
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%MZ"];

/// Day zero of spreadsheet serial dates.
pub fn spreadsheet_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("1899-12-30 is a valid date")
}

/// Coerce a raw cell into a calendar date in `zone`.
pub fn coerce_date(raw: &CellValue, zone: Tz) -> Result<NaiveDate, DateCoerceError> {
    match raw {
        CellValue::Empty => Err(DateCoerceError::Blank),
        CellValue::DateTime(dt) => Ok(dt.with_timezone(&zone).date_naive()),
        CellValue::Number(n) => from_serial(*n),
        CellValue::Text(s) => coerce_date_text(s, zone),
        CellValue::Bool(_) => Err(DateCoerceError::UnsupportedCell(raw.kind())),
    }
}

/// Spreadsheet serial day → date. The fractional (time-of-day) part is dropped.
pub fn from_serial(serial: f64) -> Result<NaiveDate, DateCoerceError> {
    let days = serial.trunc() as i64;
    let epoch = spreadsheet_epoch();
    let shifted = if days >= 0 {
        epoch.checked_add_days(Days::new(days as u64))
    } else {
        epoch.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or(DateCoerceError::SerialOutOfRange(days))
}

/// Text → date following steps 3 and 4 of the module docs.
pub fn coerce_date_text(text: &str, zone: Tz) -> Result<NaiveDate, DateCoerceError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(DateCoerceError::Blank);
    }

    let head = s.split_once('T').map_or(s, |(head, _)| head);
    if let Some(date) = DATE_PATTERNS.iter().find_map(|p| p.parse(head)) {
        return Ok(date);
    }

    if let Some(dt) = parse_offset_datetime(s) {
        return Ok(dt.with_timezone(&zone).date_naive());
    }
    // A zone-less timestamp is already wall-clock time in the reference zone.
    if let Some(naive) = parse_local_datetime(s) {
        return Ok(naive.date());
    }

    Err(DateCoerceError::Unrecognized(s.to_string()))
}

fn parse_offset_datetime(s: &str) -> Option<DateTime<chrono::FixedOffset>> {
    let upper = s.to_ascii_uppercase();
    // RFC 3339 parsing in chrono also takes a space between date and time.
    if upper.as_bytes().get(10) != Some(&b'T') {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&upper) {
        return Some(dt);
    }
    OFFSET_DATETIME_FORMATS.iter().find_map(|fmt| {
        if fmt.ends_with('Z') {
            NaiveDateTime::parse_from_str(&upper, fmt)
                .ok()
                .map(|n| n.and_utc().fixed_offset())
        } else {
            DateTime::parse_from_str(&upper, fmt).ok()
        }
    })
}

fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    let upper = s.to_ascii_uppercase();
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&upper, fmt).ok())
}
