//! Employee model and weekly-hour overrides.
//!
//! This module defines the Employee struct and the date-scoped
//! WeeklyHoursOverride used to vary an employee's contract within a month.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A date-range override of an employee's contracted weekly hours.
///
/// The range is inclusive on both ends. Overlapping ranges are allowed;
/// resolution is by list order (the first matching override wins), so the
/// original order of an employee's override list must be preserved across
/// serialization.
///
/// # Example
///
/// ```
/// use roster_engine::models::WeeklyHoursOverride;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let var = WeeklyHoursOverride {
///     start_date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 9, 14).unwrap(),
///     hours: Decimal::new(200, 1), // 20.0
/// };
/// assert!(var.contains(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()));
/// assert!(var.contains(NaiveDate::from_ymd_opt(2025, 9, 14).unwrap()));
/// assert!(!var.contains(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursOverride {
    /// The first day the override applies to (inclusive).
    pub start_date: NaiveDate,
    /// The last day the override applies to (inclusive).
    pub end_date: NaiveDate,
    /// The weekly-hour figure in effect within the range.
    pub hours: Decimal,
}

impl WeeklyHoursOverride {
    /// Returns true if the given date falls within this override's range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// An employee on the store's roster.
///
/// Owned by the store; immutable during a month's editing session except
/// through the `overrides` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display label shown on the grid (e.g. surname).
    pub label: String,
    /// The contracted weekly hours, used whenever no override applies.
    pub contracted_weekly_hours: Decimal,
    /// Date-scoped weekly-hour overrides, in resolution order.
    #[serde(default)]
    pub overrides: Vec<WeeklyHoursOverride>,
}
