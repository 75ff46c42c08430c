//! The roster grid: day rows, summary rows and the store profile.
//!
//! [`RosterGrid`] is the data holder the calculation passes operate on. It is
//! an explicit value constructed fresh for a (store, year, month) triple and
//! owned by the host; the engine keeps no process-wide state.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::cell::DayCell;
use super::employee::Employee;

/// Weekday display names in the source locale, Monday-first.
///
/// The store's working weekdays are the first `working_days_per_week`
/// entries of this ordering.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Lunedì",
    "Martedì",
    "Mercoledì",
    "Giovedì",
    "Venerdì",
    "Sabato",
    "Domenica",
];

/// Returns the source-locale display name for a weekday.
///
/// # Example
///
/// ```
/// use roster_engine::models::weekday_name;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_name(Weekday::Mon), "Lunedì");
/// assert_eq!(weekday_name(Weekday::Sun), "Domenica");
/// ```
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Returns the number of days in the given month, or `None` for an invalid
/// month number.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next_first - first).num_days() as u32)
}

/// The store parameters the engine needs: which weekdays count as working
/// days.
///
/// The working weekdays are the first `working_days_per_week` weekdays in
/// Monday-first order, so a six-day store works Monday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreProfile {
    /// Display name of the store.
    pub name: String,
    /// How many weekdays per week the store works (1–7, Monday-first).
    pub working_days_per_week: u32,
}

impl StoreProfile {
    /// Validates the profile, rejecting a working-day count outside 1–7.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=7).contains(&self.working_days_per_week) {
            return Err(EngineError::InvalidStore {
                message: format!(
                    "working_days_per_week must be between 1 and 7, got {}",
                    self.working_days_per_week
                ),
            });
        }
        Ok(())
    }

    /// Returns true if the given weekday is one of the store's working days.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::StoreProfile;
    /// use chrono::Weekday;
    ///
    /// let store = StoreProfile {
    ///     name: "Centro".to_string(),
    ///     working_days_per_week: 6,
    /// };
    /// assert!(store.is_working_day(Weekday::Sat));
    /// assert!(!store.is_working_day(Weekday::Sun));
    /// ```
    pub fn is_working_day(&self, weekday: Weekday) -> bool {
        weekday.num_days_from_monday() < self.working_days_per_week
    }

    /// Returns the store's working weekdays in Monday-first order.
    pub fn working_weekdays(&self) -> Vec<Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .take(self.working_days_per_week as usize)
        .collect()
    }
}

/// The eight fixed summary-row kinds, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryRowKind {
    /// Effective hours actually worked.
    WorkedHours,
    /// Vacation hour equivalents.
    Vacation,
    /// Converted-holiday hour equivalents.
    ExHoliday,
    /// Compensatory-leave hour equivalents.
    Rol,
    /// User-entered signed carryover from the previous period.
    PriorMonthDifference,
    /// Derived: worked + vacation + ex-holiday + ROL + carryover.
    TotalHours,
    /// Derived: theoretical contractual hours for the month.
    PaidHours,
    /// Derived: total − paid.
    CurrentMonthDifference,
}

/// The summary block of a roster grid: one value per employee for each of
/// the eight fixed rows, plus the scalar revenue total.
///
/// `total`, `paid` and `current_difference` are always derived by the
/// aggregation passes and never edited directly; `prior_month_difference`
/// is the one user-entered row. All hour values are stored at 2-decimal
/// precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Effective worked hours per employee.
    pub worked: Vec<Decimal>,
    /// Vacation hour equivalents per employee.
    pub vacation: Vec<Decimal>,
    /// Ex-holiday hour equivalents per employee.
    pub ex_holiday: Vec<Decimal>,
    /// ROL hour equivalents per employee.
    pub rol: Vec<Decimal>,
    /// Signed carryover from the previous month, user-entered.
    pub prior_month_difference: Vec<Decimal>,
    /// Derived total hours per employee.
    pub total: Vec<Decimal>,
    /// Derived theoretical paid hours per employee.
    pub paid: Vec<Decimal>,
    /// Derived current-month difference per employee.
    pub current_difference: Vec<Decimal>,
    /// Sum of the daily revenue figures.
    pub revenue_total: Decimal,
}

impl MonthlySummary {
    /// Creates a summary with every row zeroed for `employee_count` employees.
    pub fn zeroed(employee_count: usize) -> Self {
        let zeros = vec![Decimal::ZERO; employee_count];
        Self {
            worked: zeros.clone(),
            vacation: zeros.clone(),
            ex_holiday: zeros.clone(),
            rol: zeros.clone(),
            prior_month_difference: zeros.clone(),
            total: zeros.clone(),
            paid: zeros.clone(),
            current_difference: zeros,
            revenue_total: Decimal::ZERO,
        }
    }

    /// Returns the per-employee values for a summary row kind.
    pub fn row(&self, kind: SummaryRowKind) -> &[Decimal] {
        match kind {
            SummaryRowKind::WorkedHours => &self.worked,
            SummaryRowKind::Vacation => &self.vacation,
            SummaryRowKind::ExHoliday => &self.ex_holiday,
            SummaryRowKind::Rol => &self.rol,
            SummaryRowKind::PriorMonthDifference => &self.prior_month_difference,
            SummaryRowKind::TotalHours => &self.total,
            SummaryRowKind::PaidHours => &self.paid,
            SummaryRowKind::CurrentMonthDifference => &self.current_difference,
        }
    }
}

/// One calendar day of the grid: a cell per employee, an optional revenue
/// figure and day-level particularity tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRow {
    /// The calendar date of this row.
    pub date: NaiveDate,
    /// One cell per employee, in employee-list order.
    pub cells: Vec<DayCell>,
    /// The day's revenue, if entered. Always non-negative.
    pub revenue: Option<Decimal>,
    /// Free-form day-level markers, unrelated to hour computation.
    #[serde(default)]
    pub particularity_tags: Vec<String>,
}

impl DayRow {
    /// Returns the weekday of this row.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the weekday display name in the source locale.
    pub fn weekday_label(&self) -> &'static str {
        weekday_name(self.weekday())
    }
}

/// The full grid for one store and one month.
///
/// Holds exactly one [`DayRow`] per calendar day (28–31 rows), the employee
/// list with their override lists, and the summary block. The grid is
/// mutated in place through the commit layer and discarded when the editing
/// session ends or another period is selected.
///
/// # Example
///
/// ```
/// use roster_engine::models::{Employee, RosterGrid, StoreProfile};
/// use rust_decimal::Decimal;
///
/// let store = StoreProfile { name: "Centro".to_string(), working_days_per_week: 6 };
/// let employees = vec![Employee {
///     id: "emp_001".to_string(),
///     label: "Rossi".to_string(),
///     contracted_weekly_hours: Decimal::new(40, 0),
///     overrides: vec![],
/// }];
///
/// let grid = RosterGrid::new(store, 2025, 9, employees).unwrap();
/// assert_eq!(grid.days.len(), 30);
/// assert_eq!(grid.summary.worked, vec![Decimal::ZERO]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterGrid {
    /// The store this grid belongs to.
    pub store: StoreProfile,
    /// The displayed year.
    pub year: i32,
    /// The displayed month (1–12).
    pub month: u32,
    /// The store's employees, in column order.
    pub employees: Vec<Employee>,
    /// One row per calendar day of the month.
    pub days: Vec<DayRow>,
    /// The summary block.
    pub summary: MonthlySummary,
}

impl RosterGrid {
    /// Constructs an empty grid for a (store, year, month) triple.
    ///
    /// Every day row starts with one empty cell per employee, no revenue and
    /// no tags; the summary block is zeroed.
    pub fn new(
        store: StoreProfile,
        year: i32,
        month: u32,
        employees: Vec<Employee>,
    ) -> EngineResult<Self> {
        store.validate()?;
        let day_count = days_in_month(year, month).ok_or_else(|| EngineError::InvalidStore {
            message: format!("invalid period {year}-{month:02}"),
        })?;

        let days = (1..=day_count)
            .map(|day| DayRow {
                // day_count came from a valid month, so the date exists
                date: NaiveDate::from_ymd_opt(year, month, day).expect("valid day of month"),
                cells: vec![DayCell::Empty; employees.len()],
                revenue: None,
                particularity_tags: Vec::new(),
            })
            .collect();

        let summary = MonthlySummary::zeroed(employees.len());

        Ok(Self {
            store,
            year,
            month,
            employees,
            days,
            summary,
        })
    }

    /// Returns the number of days in the displayed month.
    pub fn day_count(&self) -> u32 {
        self.days.len() as u32
    }

    /// Resolves an employee id to its column index.
    pub fn employee_index(&self, id: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }

    /// Returns the date of a 1-based day of month, if within the month.
    pub fn date_of_day(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.day_count() {
            return None;
        }
        Some(self.days[(day - 1) as usize].date)
    }
}
