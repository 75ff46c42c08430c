//! The 30-minute break deduction rule.
//!
//! A shift of 6 hours or more may have a mandatory 30-minute unpaid break
//! deducted, applied optionally per interval. Both the theoretical
//! (end − start) duration and the effective (break-adjusted) duration are
//! surfaced: only the effective value feeds the worked-hours aggregate, the
//! theoretical value is informational.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::WorkInterval;

use super::time_math::hours_between;

/// The theoretical duration at or above which the break option is offered.
pub const BREAK_ELIGIBILITY_THRESHOLD: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// The break deduction, exactly half an hour.
pub const BREAK_DEDUCTION_HOURS: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Returns true if an interval of the given theoretical duration is
/// eligible for the break deduction.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::is_break_eligible;
/// use rust_decimal::Decimal;
///
/// assert!(is_break_eligible(Decimal::new(6, 0)));
/// assert!(!is_break_eligible(Decimal::new(55, 1))); // 5.5h
/// ```
pub fn is_break_eligible(theoretical_hours: Decimal) -> bool {
    theoretical_hours >= BREAK_ELIGIBILITY_THRESHOLD
}

/// Applies the break rule to a theoretical duration.
///
/// Subtracts exactly 0.5 hours when the interval is eligible
/// (theoretical ≥ 6h) and the break was requested; otherwise the duration
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::resolve_effective_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(resolve_effective_hours(Decimal::new(8, 0), true), Decimal::new(75, 1));
/// assert_eq!(resolve_effective_hours(Decimal::new(5, 0), true), Decimal::new(5, 0));
/// assert_eq!(resolve_effective_hours(Decimal::new(8, 0), false), Decimal::new(8, 0));
/// ```
pub fn resolve_effective_hours(theoretical_hours: Decimal, break_requested: bool) -> Decimal {
    if break_requested && is_break_eligible(theoretical_hours) {
        theoretical_hours - BREAK_DEDUCTION_HOURS
    } else {
        theoretical_hours
    }
}

/// The two durations of a work interval, plus the eligibility flag gating
/// the break option in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalHours {
    /// The raw end − start duration.
    pub theoretical: Decimal,
    /// The break-adjusted duration persisted into the worked-hours row.
    pub effective: Decimal,
    /// Whether the break option applies to this interval at all.
    pub break_eligible: bool,
}

/// Computes both durations of a work interval.
///
/// Propagates the time-math validation failure for impossible intervals so
/// the caller can reject the edit.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::interval_hours;
/// use roster_engine::models::WorkInterval;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let interval = WorkInterval {
///     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_applied: true,
/// };
/// let hours = interval_hours(&interval).unwrap();
/// assert_eq!(hours.theoretical, Decimal::new(8, 0));
/// assert_eq!(hours.effective, Decimal::new(75, 1)); // 7.5
/// assert!(hours.break_eligible);
/// ```
pub fn interval_hours(interval: &WorkInterval) -> EngineResult<IntervalHours> {
    let theoretical = hours_between(interval.start, interval.end)?;
    let effective = resolve_effective_hours(theoretical, interval.break_applied);
    Ok(IntervalHours {
        theoretical,
        effective,
        break_eligible: is_break_eligible(theoretical),
    })
}
