//! Time zone helpers for turning reference-zone wall-clock times into UTC.
//!
//! What this module provides:
//! - [`parse_zone`]: Parse an IANA zone name (e.g. "Europe/Luxembourg") into a [`Tz`].
//! - [`local_to_utc`]: Convert a naive wall-clock time in a zone to UTC.
//! - [`to_rfc3339_secs`]: Render a UTC instant the way the output format expects.
//!
//! Notes:
//! - Ambiguous local times happen during "fall back" when a wall time occurs twice.
//! - Nonexistent local times happen during "spring forward" when a wall time is skipped.
//! - Capacity products are addressed by wall-clock hour, so skipped times move
//!   forward to the first valid instant and repeated times resolve to their
//!   first occurrence.
//!
//! Examples (Europe/Luxembourg)
//! - 2025-03-30 02:00 does not exist -> 03:00 CEST -> 01:00Z.
//! - 2025-10-26 02:00 occurs twice -> 00:00Z (the CEST occurrence).

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::ConfigError;

/// Longest stretch of skipped wall-clock time we step over when shifting forward.
/// Whole skipped days exist (Pacific/Apia, 2011-12-30).
const MAX_GAP_MINUTES: u32 = 24 * 60;

/// Parse an IANA zone name.
pub fn parse_zone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::UnknownZone(name.to_string()))
}

/// Convert a naive local timestamp in `tz` to UTC.
///
/// Behavior:
/// - A local time that maps to a single instant returns that instant.
/// - Ambiguous (fall-back): the earlier instant.
/// - Nonexistent (spring-forward gap): the first valid wall-clock minute after it.
///
/// Returns `None` when the time cannot be placed on chrono's timeline, i.e. an
/// unresolvable local time within a day of the representable range.
pub fn local_to_utc(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    use chrono::offset::LocalResult::*;
    match tz.from_local_datetime(&naive) {
        Single(dt) | Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        None => {
            let day = TimeDelta::days(1);
            naive.checked_sub_signed(day)?;
            naive.checked_add_signed(day)?;

            let mut t = naive;
            for _ in 0..MAX_GAP_MINUTES {
                t = t.checked_add_signed(TimeDelta::minutes(1))?;
                match tz.from_local_datetime(&t) {
                    Single(dt) | Ambiguous(dt, _) => return Some(dt.with_timezone(&Utc)),
                    None => continue,
                }
            }
            Option::None
        }
    }
}

/// Format a UTC instant as RFC-3339 with whole seconds and a `Z` designator.
pub fn to_rfc3339_secs(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
