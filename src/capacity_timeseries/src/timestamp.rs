//! Delivery timestamps: "hour N of local day D" → UTC instant.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::{
    errors::TimestampError,
    tz::local_to_utc,
};

/// Build the UTC instant for wall-clock hour `hour_offset` of `date` in `zone`.
///
/// The offset is added to local midnight as wall-clock hours, so on a
/// 23- or 25-hour day hour 12 is still noon local time. Offsets outside
/// `0..24` roll over into the neighbouring days. Local times that the zone
/// skips resolve to the next valid instant; repeated ones to the first.
pub fn build_timestamp(
    date: NaiveDate,
    hour_offset: i32,
    zone: Tz,
) -> Result<DateTime<Utc>, TimestampError> {
    let out_of_range = || TimestampError::OutOfRange { date, hour_offset };
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(out_of_range)?;
    let local = TimeDelta::try_hours(i64::from(hour_offset))
        .and_then(|delta| midnight.checked_add_signed(delta))
        .ok_or_else(out_of_range)?;
    local_to_utc(local, zone).ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Luxembourg;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn standard_time_noon() {
        let ts = build_timestamp(ymd(2025, 3, 10), 12, Luxembourg).unwrap();
        assert_eq!(ts, utc(2025, 3, 10, 11));
    }

    #[test]
    fn summer_time_noon() {
        let ts = build_timestamp(ymd(2025, 7, 1), 12, Luxembourg).unwrap();
        assert_eq!(ts, utc(2025, 7, 1, 10));
    }

    #[test]
    fn spring_forward_day_uses_wall_clock_hours() {
        let day = ymd(2025, 3, 30);
        // Before the jump: +01:00.
        assert_eq!(build_timestamp(day, 1, Luxembourg).unwrap(), utc(2025, 3, 30, 0));
        // 02:00 is skipped and resolves to 03:00 CEST.
        assert_eq!(build_timestamp(day, 2, Luxembourg).unwrap(), utc(2025, 3, 30, 1));
        // After the jump: +02:00, not midnight + 4 * 3600s (which would be 03:00Z).
        assert_eq!(build_timestamp(day, 4, Luxembourg).unwrap(), utc(2025, 3, 30, 2));
    }

    #[test]
    fn fall_back_day_takes_first_occurrence() {
        let day = ymd(2025, 10, 26);
        assert_eq!(build_timestamp(day, 2, Luxembourg).unwrap(), utc(2025, 10, 26, 0));
        assert_eq!(build_timestamp(day, 3, Luxembourg).unwrap(), utc(2025, 10, 26, 2));
    }

    #[test]
    fn offsets_roll_into_adjacent_days() {
        assert_eq!(
            build_timestamp(ymd(2025, 3, 10), -1, Luxembourg).unwrap(),
            utc(2025, 3, 9, 22)
        );
        assert_eq!(
            build_timestamp(ymd(2025, 3, 10), 24, Luxembourg).unwrap(),
            utc(2025, 3, 10, 23)
        );
    }

    #[test]
    fn offsets_past_calendar_bounds_are_out_of_range() {
        let err = build_timestamp(NaiveDate::MAX, 24, Luxembourg).unwrap_err();
        assert!(matches!(err, TimestampError::OutOfRange { hour_offset: 24, .. }));
        let err = build_timestamp(NaiveDate::MIN, -1, Luxembourg).unwrap_err();
        assert!(matches!(err, TimestampError::OutOfRange { hour_offset: -1, .. }));
    }

    #[test]
    fn first_representable_day_does_not_shift_into_a_fake_gap() {
        let err = build_timestamp(NaiveDate::MIN, 0, Luxembourg).unwrap_err();
        assert_eq!(
            err,
            TimestampError::OutOfRange {
                date: NaiveDate::MIN,
                hour_offset: 0
            }
        );
    }
}
