//! The commit layer: validated grid edits.
//!
//! Every mutation of the grid goes through these functions. Each one
//! validates its input (an impossible interval or a negative revenue figure
//! is rejected before it ever reaches the grid), applies the change, then
//! runs the fixed recomputation pipeline so the summary rows stay
//! consistent after every edit.

use rust_decimal::Decimal;

use crate::config::ReasonRegistry;
use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceEntry, DayCell, RosterGrid, WeeklyHoursOverride, WorkInterval};

use super::aggregation::recompute_all;
use super::time_math::hours_between;

/// Resolves a (day, employee id) address to indices, validating both.
fn locate(grid: &RosterGrid, day: u32, employee_id: &str) -> EngineResult<(usize, usize)> {
    let day_idx = day_index(grid, day)?;
    let employee_idx = grid
        .employee_index(employee_id)
        .ok_or_else(|| EngineError::UnknownEmployee {
            id: employee_id.to_string(),
        })?;
    Ok((day_idx, employee_idx))
}

fn day_index(grid: &RosterGrid, day: u32) -> EngineResult<usize> {
    if day == 0 || day > grid.day_count() {
        return Err(EngineError::DayOutOfRange {
            day,
            days_in_month: grid.day_count(),
        });
    }
    Ok((day - 1) as usize)
}

/// Commits a work interval into a cell.
///
/// The interval is validated first: a wrapped gap of 24 hours or more is a
/// recoverable validation error and the grid is left untouched. On success
/// the cell is replaced and all summary rows are recomputed.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::commit_work_interval;
/// use roster_engine::config::ReasonRegistry;
/// use roster_engine::models::{Employee, RosterGrid, StoreProfile, WorkInterval};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let store = StoreProfile { name: "Centro".to_string(), working_days_per_week: 6 };
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     label: "Rossi".to_string(),
///     contracted_weekly_hours: Decimal::new(40, 0),
///     overrides: vec![],
/// };
/// let mut grid = RosterGrid::new(store, 2025, 9, vec![employee]).unwrap();
/// let registry = ReasonRegistry::default();
///
/// let interval = WorkInterval {
///     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_applied: false,
/// };
/// commit_work_interval(&mut grid, &registry, 1, "emp_001", interval).unwrap();
/// assert_eq!(grid.summary.worked[0], Decimal::new(8, 0));
/// ```
pub fn commit_work_interval(
    grid: &mut RosterGrid,
    reasons: &ReasonRegistry,
    day: u32,
    employee_id: &str,
    interval: WorkInterval,
) -> EngineResult<()> {
    // Validation happens before the grid is touched: the aggregator must
    // never see an impossible interval.
    hours_between(interval.start, interval.end)?;
    let (day_idx, employee_idx) = locate(grid, day, employee_id)?;
    grid.days[day_idx].cells[employee_idx] = DayCell::Work(interval);
    recompute_all(grid, reasons)
}

/// Commits an absence marker into a cell and recomputes the summary.
///
/// The reason id is not validated against the registry here: classification
/// happens during aggregation and unknown ids degrade to the
/// non-hour-bearing category.
pub fn commit_absence(
    grid: &mut RosterGrid,
    reasons: &ReasonRegistry,
    day: u32,
    employee_id: &str,
    entry: AbsenceEntry,
) -> EngineResult<()> {
    let (day_idx, employee_idx) = locate(grid, day, employee_id)?;
    grid.days[day_idx].cells[employee_idx] = DayCell::Absence(entry);
    recompute_all(grid, reasons)
}

/// Clears a cell back to empty and recomputes the summary.
pub fn clear_cell(
    grid: &mut RosterGrid,
    reasons: &ReasonRegistry,
    day: u32,
    employee_id: &str,
) -> EngineResult<()> {
    let (day_idx, employee_idx) = locate(grid, day, employee_id)?;
    grid.days[day_idx].cells[employee_idx] = DayCell::Empty;
    recompute_all(grid, reasons)
}

/// Commits a day's revenue figure and recomputes the summary.
///
/// Negative revenue is rejected; `None` clears the entry.
pub fn commit_revenue(
    grid: &mut RosterGrid,
    reasons: &ReasonRegistry,
    day: u32,
    revenue: Option<Decimal>,
) -> EngineResult<()> {
    if let Some(value) = revenue {
        if value < Decimal::ZERO {
            return Err(EngineError::NegativeRevenue {
                value: value.to_string(),
            });
        }
    }
    let day_idx = day_index(grid, day)?;
    grid.days[day_idx].revenue = revenue.map(|v| v.round_dp(2));
    recompute_all(grid, reasons)
}

/// Commits an employee's signed prior-month carryover and recomputes.
///
/// This is the one user-entered summary row; the derived rows are refreshed
/// from it.
pub fn commit_prior_month_difference(
    grid: &mut RosterGrid,
    reasons: &ReasonRegistry,
    employee_id: &str,
    value: Decimal,
) -> EngineResult<()> {
    let employee_idx = grid
        .employee_index(employee_id)
        .ok_or_else(|| EngineError::UnknownEmployee {
            id: employee_id.to_string(),
        })?;
    grid.summary.prior_month_difference[employee_idx] = value.round_dp(2);
    recompute_all(grid, reasons)
}

/// Replaces an employee's override list (order preserved) and recomputes.
pub fn commit_overrides(
    grid: &mut RosterGrid,
    reasons: &ReasonRegistry,
    employee_id: &str,
    overrides: Vec<WeeklyHoursOverride>,
) -> EngineResult<()> {
    let employee_idx = grid
        .employee_index(employee_id)
        .ok_or_else(|| EngineError::UnknownEmployee {
            id: employee_id.to_string(),
        })?;
    grid.employees[employee_idx].overrides = overrides;
    recompute_all(grid, reasons)
}

/// Sets a day's particularity tags.
///
/// Tags are day-level markers unrelated to hour computation, so no
/// recomputation runs.
pub fn set_particularity_tags(
    grid: &mut RosterGrid,
    day: u32,
    tags: Vec<String>,
) -> EngineResult<()> {
    let day_idx = day_index(grid, day)?;
    grid.days[day_idx].particularity_tags = tags;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AbsenceReason;
    use crate::models::{AbsenceCategory, Employee, StoreProfile};
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn make_registry() -> ReasonRegistry {
        let mut reasons = HashMap::new();
        reasons.insert(
            "ferie".to_string(),
            AbsenceReason {
                abbreviation: "FE".to_string(),
                label: "Ferie".to_string(),
                category: AbsenceCategory::Vacation,
            },
        );
        ReasonRegistry::new(reasons)
    }

    fn make_grid() -> RosterGrid {
        let store = StoreProfile {
            name: "Negozio Centro".to_string(),
            working_days_per_week: 6,
        };
        let employee = Employee {
            id: "emp_001".to_string(),
            label: "Rossi".to_string(),
            contracted_weekly_hours: dec("40"),
            overrides: vec![],
        };
        RosterGrid::new(store, 2025, 9, vec![employee]).unwrap()
    }

    fn interval(start: &str, end: &str, break_applied: bool) -> WorkInterval {
        WorkInterval {
            start: make_time(start),
            end: make_time(end),
            break_applied,
        }
    }

    /// ED-001: a committed interval updates the worked row
    #[test]
    fn test_commit_work_interval_recomputes() {
        let mut grid = make_grid();
        let registry = make_registry();

        commit_work_interval(&mut grid, &registry, 1, "emp_001", interval("09:00", "17:00", true))
            .unwrap();

        assert_eq!(grid.summary.worked, vec![dec("7.50")]);
        assert!(grid.days[0].cells[0].as_work().is_some());
    }

    /// ED-002: an impossible interval is rejected and the grid untouched
    #[test]
    fn test_invalid_interval_rejected_without_commit() {
        let mut grid = make_grid();
        let registry = make_registry();

        let result = commit_work_interval(
            &mut grid,
            &registry,
            1,
            "emp_001",
            interval("10:00", "10:00", false),
        );

        assert!(matches!(result, Err(EngineError::InvalidInterval { .. })));
        assert!(grid.days[0].cells[0].is_empty());
        assert_eq!(grid.summary.worked, vec![Decimal::ZERO]);
    }

    /// ED-003: absence commit classifies at aggregation time
    #[test]
    fn test_commit_absence_recomputes() {
        let mut grid = make_grid();
        let registry = make_registry();

        commit_absence(
            &mut grid,
            &registry,
            10,
            "emp_001",
            AbsenceEntry {
                reason_id: "ferie".to_string(),
                abbreviation: "FE".to_string(),
            },
        )
        .unwrap();

        assert_eq!(grid.summary.vacation, vec![dec("6.67")]);
    }

    /// ED-004: clearing a cell removes its contribution
    #[test]
    fn test_clear_cell_recomputes() {
        let mut grid = make_grid();
        let registry = make_registry();

        commit_work_interval(&mut grid, &registry, 1, "emp_001", interval("09:00", "17:00", false))
            .unwrap();
        assert_eq!(grid.summary.worked, vec![dec("8.00")]);

        clear_cell(&mut grid, &registry, 1, "emp_001").unwrap();
        assert_eq!(grid.summary.worked, vec![Decimal::ZERO]);
        assert!(grid.days[0].cells[0].is_empty());
    }

    /// ED-005: revenue commit refreshes the total, negative rejected
    #[test]
    fn test_commit_revenue() {
        let mut grid = make_grid();
        let registry = make_registry();

        commit_revenue(&mut grid, &registry, 1, Some(dec("100.00"))).unwrap();
        commit_revenue(&mut grid, &registry, 2, Some(dec("250.50"))).unwrap();
        assert_eq!(grid.summary.revenue_total, dec("350.50"));

        let result = commit_revenue(&mut grid, &registry, 3, Some(dec("-5")));
        assert!(matches!(result, Err(EngineError::NegativeRevenue { .. })));
        assert_eq!(grid.summary.revenue_total, dec("350.50"));

        commit_revenue(&mut grid, &registry, 1, None).unwrap();
        assert_eq!(grid.summary.revenue_total, dec("250.50"));
    }

    /// ED-006: carryover feeds the total row
    #[test]
    fn test_commit_prior_month_difference() {
        let mut grid = make_grid();
        let registry = make_registry();

        commit_prior_month_difference(&mut grid, &registry, "emp_001", dec("2.00")).unwrap();
        assert_eq!(grid.summary.total, vec![dec("2.00")]);

        commit_prior_month_difference(&mut grid, &registry, "emp_001", dec("-1.5")).unwrap();
        assert_eq!(grid.summary.total, vec![dec("-1.50")]);
    }

    /// ED-007: an override change reflows motive and paid hours
    #[test]
    fn test_commit_overrides_recomputes() {
        let mut grid = make_grid();
        let registry = make_registry();

        commit_absence(
            &mut grid,
            &registry,
            10,
            "emp_001",
            AbsenceEntry {
                reason_id: "ferie".to_string(),
                abbreviation: "FE".to_string(),
            },
        )
        .unwrap();
        assert_eq!(grid.summary.vacation, vec![dec("6.67")]);

        // Sep 10 now falls in a 20h week: the share halves
        commit_overrides(
            &mut grid,
            &registry,
            "emp_001",
            vec![WeeklyHoursOverride {
                start_date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 9, 14).unwrap(),
                hours: dec("20"),
            }],
        )
        .unwrap();
        assert_eq!(grid.summary.vacation, vec![dec("3.33")]);
    }

    /// ED-008: addressing errors
    #[test]
    fn test_addressing_errors() {
        let mut grid = make_grid();
        let registry = make_registry();

        let result =
            commit_work_interval(&mut grid, &registry, 31, "emp_001", interval("09:00", "12:00", false));
        assert!(matches!(result, Err(EngineError::DayOutOfRange { day: 31, .. })));

        let result =
            commit_work_interval(&mut grid, &registry, 1, "emp_999", interval("09:00", "12:00", false));
        assert!(matches!(result, Err(EngineError::UnknownEmployee { .. })));

        let result = commit_prior_month_difference(&mut grid, &registry, "emp_999", dec("1"));
        assert!(matches!(result, Err(EngineError::UnknownEmployee { .. })));
    }

    /// ED-009: tags are stored without touching the summary
    #[test]
    fn test_set_particularity_tags() {
        let mut grid = make_grid();
        let registry = make_registry();
        commit_revenue(&mut grid, &registry, 1, Some(dec("80.00"))).unwrap();
        let summary_before = grid.summary.clone();

        set_particularity_tags(&mut grid, 5, vec!["inventario".to_string()]).unwrap();

        assert_eq!(grid.days[4].particularity_tags, vec!["inventario"]);
        assert_eq!(grid.summary, summary_before);

        let result = set_particularity_tags(&mut grid, 0, vec![]);
        assert!(matches!(result, Err(EngineError::DayOutOfRange { .. })));
    }

    /// ED-010: overwriting a work cell with an absence replaces it
    #[test]
    fn test_overwrite_work_with_absence() {
        let mut grid = make_grid();
        let registry = make_registry();

        commit_work_interval(&mut grid, &registry, 10, "emp_001", interval("09:00", "17:00", false))
            .unwrap();
        commit_absence(
            &mut grid,
            &registry,
            10,
            "emp_001",
            AbsenceEntry {
                reason_id: "ferie".to_string(),
                abbreviation: "FE".to_string(),
            },
        )
        .unwrap();

        assert_eq!(grid.summary.worked, vec![Decimal::ZERO]);
        assert_eq!(grid.summary.vacation, vec![dec("6.67")]);
    }
}
