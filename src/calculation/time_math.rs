//! Clock-time to decimal-hour conversion.
//!
//! This module provides the conversions between `HH:MM` clock times and
//! decimal-hour durations, including overnight-shift handling: an end time
//! numerically at or before the start time is taken to fall on the next day.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: i64 = 24 * 60;

fn minutes_from_midnight(time: NaiveTime) -> i64 {
    (time.hour() * 60 + time.minute()) as i64
}

fn time_from_minutes(minutes: i64) -> NaiveTime {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    // wrapped is always within one day
    NaiveTime::from_hms_opt((wrapped / 60) as u32, (wrapped % 60) as u32, 0)
        .expect("minutes wrapped to a single day")
}

/// Calculates the decimal-hour duration between two clock times.
///
/// If `end` is at or before `start`, the shift is assumed to cross midnight
/// and 24 hours are added before computing the difference. The result is
/// rounded to 2 decimals. A wrapped gap of 24 hours or more (start and end
/// effectively identical) is rejected with
/// [`EngineError::InvalidInterval`] so the caller can refuse the edit.
///
/// Seconds are ignored; the grid keys times at minute resolution.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::hours_between;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let five_pm = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// assert_eq!(hours_between(nine, five_pm).unwrap(), Decimal::new(8, 0));
///
/// // Overnight wrap: 22:00 to 06:00 is 8 hours
/// let ten_pm = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let six_am = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(hours_between(ten_pm, six_am).unwrap(), Decimal::new(8, 0));
///
/// // Zero-length intervals are rejected, not silently zero
/// assert!(hours_between(nine, nine).is_err());
/// ```
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> EngineResult<Decimal> {
    let mut gap = minutes_from_midnight(end) - minutes_from_midnight(start);
    if gap <= 0 {
        gap += MINUTES_PER_DAY;
    }
    if gap >= MINUTES_PER_DAY {
        return Err(EngineError::InvalidInterval { start, end });
    }
    Ok((Decimal::new(gap, 0) / Decimal::new(60, 0)).round_dp(2))
}

/// Adds a decimal-hour duration to a clock time, wrapping at 24 hours.
///
/// Used by manual-duration entry to derive an end time from a start time.
/// The duration is applied at minute resolution.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::add_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let ten_pm = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = add_hours(ten_pm, Decimal::new(85, 1)); // +8.5h
/// assert_eq!(end, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
/// ```
pub fn add_hours(start: NaiveTime, hours: Decimal) -> NaiveTime {
    let delta = (hours * Decimal::new(60, 0))
        .round()
        .to_i64()
        .unwrap_or_default();
    time_from_minutes(minutes_from_midnight(start) + delta)
}

/// Subtracts a decimal-hour duration from a clock time, wrapping at 24 hours.
///
/// The inverse of [`add_hours`], used to derive a start time from an end
/// time during manual-duration entry.
pub fn subtract_hours(end: NaiveTime, hours: Decimal) -> NaiveTime {
    add_hours(end, -hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    /// TM-001: ordinary daytime interval
    #[test]
    fn test_daytime_interval() {
        assert_eq!(
            hours_between(make_time("09:00"), make_time("17:00")).unwrap(),
            dec("8")
        );
    }

    /// TM-002: overnight wrap
    #[test]
    fn test_overnight_interval() {
        assert_eq!(
            hours_between(make_time("22:00"), make_time("06:00")).unwrap(),
            dec("8")
        );
    }

    /// TM-003: zero-length interval rejected
    #[test]
    fn test_zero_length_interval_rejected() {
        let result = hours_between(make_time("10:00"), make_time("10:00"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidInterval { .. })
        ));
    }

    /// TM-004: partial hours round to 2 decimals
    #[test]
    fn test_partial_hours_rounded_to_2_decimals() {
        // 09:00 to 16:50 is 7 hours 50 minutes = 7.8333... -> 7.83
        assert_eq!(
            hours_between(make_time("09:00"), make_time("16:50")).unwrap(),
            dec("7.83")
        );
    }

    /// TM-005: one-minute interval
    #[test]
    fn test_one_minute_interval() {
        assert_eq!(
            hours_between(make_time("10:00"), make_time("10:01")).unwrap(),
            dec("0.02")
        );
    }

    /// TM-006: longest representable interval (one minute short of a day)
    #[test]
    fn test_interval_just_under_24_hours() {
        assert_eq!(
            hours_between(make_time("10:00"), make_time("09:59")).unwrap(),
            dec("23.98")
        );
    }

    #[test]
    fn test_end_exactly_at_midnight() {
        // 16:00 to 00:00 wraps: 8 hours
        assert_eq!(
            hours_between(make_time("16:00"), make_time("00:00")).unwrap(),
            dec("8")
        );
    }

    #[test]
    fn test_add_hours_plain() {
        assert_eq!(
            add_hours(make_time("09:00"), dec("8")),
            make_time("17:00")
        );
    }

    #[test]
    fn test_add_hours_wraps_past_midnight() {
        assert_eq!(
            add_hours(make_time("22:00"), dec("8.5")),
            make_time("06:30")
        );
    }

    #[test]
    fn test_subtract_hours_plain() {
        assert_eq!(
            subtract_hours(make_time("17:30"), dec("8.5")),
            make_time("09:00")
        );
    }

    #[test]
    fn test_subtract_hours_wraps_before_midnight() {
        assert_eq!(
            subtract_hours(make_time("06:00"), dec("8")),
            make_time("22:00")
        );
    }

    #[test]
    fn test_add_fractional_hours_uses_minute_resolution() {
        // 0.25h = 15 minutes
        assert_eq!(
            add_hours(make_time("09:00"), dec("0.25")),
            make_time("09:15")
        );
    }

    proptest! {
        #[test]
        fn prop_duration_is_positive_and_under_24h(
            start_h in 0u32..24, start_m in 0u32..60,
            end_h in 0u32..24, end_m in 0u32..60,
        ) {
            let start = NaiveTime::from_hms_opt(start_h, start_m, 0).unwrap();
            let end = NaiveTime::from_hms_opt(end_h, end_m, 0).unwrap();

            match hours_between(start, end) {
                Ok(hours) => {
                    prop_assert!(hours > Decimal::ZERO);
                    prop_assert!(hours < Decimal::new(24, 0));
                    // 2-decimal precision
                    prop_assert_eq!(hours, hours.round_dp(2));
                }
                // Only the degenerate equal-times interval is rejected
                Err(_) => prop_assert_eq!(start, end),
            }
        }

        #[test]
        fn prop_add_then_subtract_round_trips(
            start_h in 0u32..24, start_m in 0u32..60,
            duration_min in 1i64..1440,
        ) {
            let start = NaiveTime::from_hms_opt(start_h, start_m, 0).unwrap();
            let hours = Decimal::new(duration_min, 0) / Decimal::new(60, 0);

            let end = add_hours(start, hours);
            prop_assert_eq!(subtract_hours(end, hours), start);
        }
    }
}
