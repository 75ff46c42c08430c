//! Weekly-hour override resolution.
//!
//! Resolves the weekly-hour figure in effect for an employee on a given
//! calendar date from the employee's list of date-range overrides.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Employee;

/// Returns the weekly-hour figure in effect for an employee on a date.
///
/// The employee's override list is scanned in order and the first override
/// whose inclusive range contains the date wins; with no match the
/// contracted figure applies. Overlapping ranges are allowed and are not
/// validated — resolution is strictly by list order.
///
/// This function is called once per (employee, day) pair during both the
/// motive-hour and paid-hour passes, so it is deterministic and
/// side-effect-free.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::effective_weekly_hours;
/// use roster_engine::models::{Employee, WeeklyHoursOverride};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     label: "Rossi".to_string(),
///     contracted_weekly_hours: Decimal::new(40, 0),
///     overrides: vec![WeeklyHoursOverride {
///         start_date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2025, 9, 14).unwrap(),
///         hours: Decimal::new(20, 0),
///     }],
/// };
///
/// let inside = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
/// let outside = NaiveDate::from_ymd_opt(2025, 9, 20).unwrap();
/// assert_eq!(effective_weekly_hours(&employee, inside), Decimal::new(20, 0));
/// assert_eq!(effective_weekly_hours(&employee, outside), Decimal::new(40, 0));
/// ```
pub fn effective_weekly_hours(employee: &Employee, date: NaiveDate) -> Decimal {
    employee
        .overrides
        .iter()
        .find(|var| var.contains(date))
        .map(|var| var.hours)
        .unwrap_or(employee.contracted_weekly_hours)
}
