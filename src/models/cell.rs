//! Day-cell models: work intervals, absence entries and their categories.
//!
//! A grid cell is a tagged union decided once at edit time — the engine
//! never re-derives a cell's shape from serialized string content.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A keyed work interval for one employee on one day.
///
/// `end` may be numerically earlier than `start`, meaning the shift crosses
/// midnight. A wrapped gap of 24 hours or more is invalid and is rejected
/// before the interval ever reaches the grid.
///
/// # Example
///
/// ```
/// use roster_engine::models::WorkInterval;
/// use chrono::NaiveTime;
///
/// let overnight = WorkInterval {
///     start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     break_applied: false,
/// };
/// assert!(overnight.end < overnight.start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The start time of the shift.
    pub start: NaiveTime,
    /// The end time of the shift.
    pub end: NaiveTime,
    /// Whether the 30-minute break deduction was requested for this interval.
    pub break_applied: bool,
}

/// An absence marker for one employee on one day.
///
/// The `reason_id` resolves through the store's absence-reasons registry to
/// one of the fixed [`AbsenceCategory`] values; the abbreviation is what the
/// grid displays in the cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceEntry {
    /// Identifier of the absence reason in the reasons registry.
    pub reason_id: String,
    /// The abbreviation shown in the cell (e.g. "FE").
    pub abbreviation: String,
}

/// The fixed absence categories recognised by the aggregation passes.
///
/// `Vacation`, `Rol` and `ExHoliday` are hour-bearing: an absence day in one
/// of these categories contributes a pro-rated daily share of the employee's
/// weekly hours. `Other` is informational only and contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceCategory {
    /// Vacation leave.
    Vacation,
    /// Compensatory leave (time bank).
    Rol,
    /// Converted-holiday leave credit.
    ExHoliday,
    /// Any other reason: recorded for reporting, not hour-bearing.
    Other,
}

impl AbsenceCategory {
    /// Returns true for the categories that contribute hours to the summary.
    pub fn is_hour_bearing(&self) -> bool {
        !matches!(self, AbsenceCategory::Other)
    }
}

impl std::fmt::Display for AbsenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbsenceCategory::Vacation => write!(f, "Vacation"),
            AbsenceCategory::Rol => write!(f, "ROL"),
            AbsenceCategory::ExHoliday => write!(f, "Ex-holiday"),
            AbsenceCategory::Other => write!(f, "Other"),
        }
    }
}

/// One grid cell: empty, a work interval, or an absence marker.
///
/// The shape is decided once when the cell is edited or deserialized at the
/// boundary; the aggregation passes match on the variant directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayCell {
    /// No entry for this employee on this day.
    Empty,
    /// A keyed work interval.
    Work(WorkInterval),
    /// An absence marker.
    Absence(AbsenceEntry),
}

impl DayCell {
    /// Returns true if the cell holds no entry.
    pub fn is_empty(&self) -> bool {
        matches!(self, DayCell::Empty)
    }

    /// Returns the work interval if the cell holds one.
    pub fn as_work(&self) -> Option<&WorkInterval> {
        match self {
            DayCell::Work(interval) => Some(interval),
            _ => None,
        }
    }

    /// Returns the absence entry if the cell holds one.
    pub fn as_absence(&self) -> Option<&AbsenceEntry> {
        match self {
            DayCell::Absence(entry) => Some(entry),
            _ => None,
        }
    }
}

impl Default for DayCell {
    fn default() -> Self {
        DayCell::Empty
    }
}
