//! The fixed grid recomputation pipeline.
//!
//! [`recompute_all`] rewrites the summary rows of a roster grid in five
//! ordered passes — worked hours, motive hours, total hours, paid hours,
//! current-month difference — followed by the revenue total. Later passes
//! read earlier outputs, so the order is fixed. Every run is a full re-scan
//! of the day rows: the pipeline is idempotent and safe to re-run on every
//! edit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ReasonRegistry;
use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceCategory, DayCell, RosterGrid};

use super::absences::{classify, hour_equivalent_for_day};
use super::break_policy::interval_hours;
use super::variations::effective_weekly_hours;

/// The sign of a current-month difference, for presentation only.
///
/// Classifying the sign has no further numeric consequence; the grid shows
/// surpluses and deficits differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceSign {
    /// The employee is at or above the theoretical paid hours.
    NonNegative,
    /// The employee is below the theoretical paid hours.
    Negative,
}

/// Classifies the sign of a difference value.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::{DifferenceSign, classify_difference};
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify_difference(Decimal::ZERO), DifferenceSign::NonNegative);
/// assert_eq!(classify_difference(Decimal::new(-150, 2)), DifferenceSign::Negative);
/// ```
pub fn classify_difference(value: Decimal) -> DifferenceSign {
    if value < Decimal::ZERO {
        DifferenceSign::Negative
    } else {
        DifferenceSign::NonNegative
    }
}

/// Recomputes every derived summary row of the grid, in the fixed order.
///
/// The five passes run in sequence after any edit:
///
/// 1. **Worked hours** — sum of the break-adjusted effective hours of every
///    work interval; absence and empty cells contribute 0.
/// 2. **Motive hours** — each absence cell is classified and its pro-rated
///    daily hour equivalent added to the vacation, ROL or ex-holiday row.
/// 3. **Total hours** — worked + vacation + ex-holiday + ROL + the
///    user-entered prior-month difference.
/// 4. **Paid hours** — for every calendar day falling on one of the store's
///    working weekdays, the daily share of the weekly hours in effect on
///    that date, regardless of what was actually keyed in.
/// 5. **Current-month difference** — total − paid.
///
/// The revenue total is refreshed last. Each row value is rounded to
/// 2 decimals when written, and later passes read the stored rounded
/// values.
///
/// Malformed individual cells never abort the pipeline: a work interval
/// that fails time-math validation contributes 0 with a diagnostic log
/// (such intervals are rejected at commit time and should not exist in a
/// well-formed grid). A day row holding the wrong number of cells is a
/// structural-integrity violation and fails the whole call — the engine
/// does not produce partial output.
pub fn recompute_all(grid: &mut RosterGrid, reasons: &ReasonRegistry) -> EngineResult<()> {
    let employee_count = grid.employees.len();

    for row in &grid.days {
        if row.cells.len() != employee_count {
            return Err(EngineError::GridShape {
                date: row.date,
                expected: employee_count,
                actual: row.cells.len(),
            });
        }
    }

    if grid.summary.prior_month_difference.len() != employee_count {
        warn!(
            expected = employee_count,
            actual = grid.summary.prior_month_difference.len(),
            "prior-month difference row resized to the employee count"
        );
        grid.summary
            .prior_month_difference
            .resize(employee_count, Decimal::ZERO);
    }

    // Pass 1: worked hours
    let mut worked = vec![Decimal::ZERO; employee_count];
    for row in &grid.days {
        for (idx, cell) in row.cells.iter().enumerate() {
            if let DayCell::Work(interval) = cell {
                match interval_hours(interval) {
                    Ok(hours) => worked[idx] += hours.effective,
                    Err(err) => warn!(
                        date = %row.date,
                        employee = %grid.employees[idx].id,
                        error = %err,
                        "skipping malformed work interval during aggregation"
                    ),
                }
            }
        }
    }
    grid.summary.worked = worked.into_iter().map(|h| h.round_dp(2)).collect();

    // Pass 2: motive hours
    let mut vacation = vec![Decimal::ZERO; employee_count];
    let mut rol = vec![Decimal::ZERO; employee_count];
    let mut ex_holiday = vec![Decimal::ZERO; employee_count];
    for row in &grid.days {
        for (idx, cell) in row.cells.iter().enumerate() {
            if let DayCell::Absence(entry) = cell {
                let category = classify(reasons, &entry.reason_id);
                let share = hour_equivalent_for_day(
                    category,
                    &grid.employees[idx],
                    row.date,
                    grid.store.working_days_per_week,
                );
                match category {
                    AbsenceCategory::Vacation => vacation[idx] += share,
                    AbsenceCategory::Rol => rol[idx] += share,
                    AbsenceCategory::ExHoliday => ex_holiday[idx] += share,
                    AbsenceCategory::Other => {}
                }
            }
        }
    }
    grid.summary.vacation = vacation.into_iter().map(|h| h.round_dp(2)).collect();
    grid.summary.rol = rol.into_iter().map(|h| h.round_dp(2)).collect();
    grid.summary.ex_holiday = ex_holiday.into_iter().map(|h| h.round_dp(2)).collect();

    // Pass 3: total hours, from the stored (rounded) rows
    grid.summary.total = (0..employee_count)
        .map(|idx| {
            (grid.summary.worked[idx]
                + grid.summary.vacation[idx]
                + grid.summary.ex_holiday[idx]
                + grid.summary.rol[idx]
                + grid.summary.prior_month_difference[idx])
                .round_dp(2)
        })
        .collect();

    // Pass 4: paid hours, a theoretical projection over the working weekdays
    let divisor = Decimal::from(grid.store.working_days_per_week);
    grid.summary.paid = grid
        .employees
        .iter()
        .map(|employee| {
            grid.days
                .iter()
                .filter(|row| grid.store.is_working_day(row.weekday()))
                .map(|row| effective_weekly_hours(employee, row.date) / divisor)
                .sum::<Decimal>()
                .round_dp(2)
        })
        .collect();

    // Pass 5: current-month difference
    grid.summary.current_difference = (0..employee_count)
        .map(|idx| (grid.summary.total[idx] - grid.summary.paid[idx]).round_dp(2))
        .collect();

    recompute_revenue(grid);
    Ok(())
}

/// Refreshes the revenue total: the sum of every day's revenue figure.
///
/// Independent of the hour passes; days without a revenue entry contribute
/// nothing.
pub fn recompute_revenue(grid: &mut RosterGrid) {
    grid.summary.revenue_total = grid
        .days
        .iter()
        .filter_map(|row| row.revenue)
        .sum::<Decimal>()
        .round_dp(2);
}
