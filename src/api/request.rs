//! Request types for the roster engine API.
//!
//! This module defines the JSON snapshot structure for the `/recompute`
//! endpoint and its conversion into domain types. Cell shapes are decided
//! once here at the boundary; clock times arrive as `HH:MM` strings and
//! numeric snapshot fields (revenue, carryover) arrive as raw strings that
//! parse leniently — unparsable content degrades to 0 with a diagnostic.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::hours_between;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AbsenceEntry, DayCell, Employee, RosterGrid, StoreProfile, WeeklyHoursOverride, WorkInterval,
};

/// Request body for the `/recompute` endpoint: a full grid snapshot for one
/// (store, year, month) editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeRequest {
    /// The displayed year.
    pub year: i32,
    /// The displayed month (1–12).
    pub month: u32,
    /// The store's employees, in column order.
    pub employees: Vec<EmployeeRequest>,
    /// Day rows with entered cells. Days not listed stay empty.
    #[serde(default)]
    pub days: Vec<DayRowRequest>,
    /// Raw signed carryover values, one per employee in column order.
    #[serde(default)]
    pub prior_month_differences: Vec<String>,
}

/// Employee information in a recompute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display label shown on the grid.
    pub label: String,
    /// The contracted weekly hours.
    pub contracted_weekly_hours: Decimal,
    /// Date-scoped weekly-hour overrides, in resolution order.
    #[serde(default)]
    pub overrides: Vec<OverrideRequest>,
}

/// A weekly-hour override in a recompute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideRequest {
    /// The first day the override applies to (inclusive).
    pub start_date: NaiveDate,
    /// The last day the override applies to (inclusive).
    pub end_date: NaiveDate,
    /// The weekly-hour figure in effect within the range.
    pub hours: Decimal,
}

/// One day row in a recompute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRowRequest {
    /// The 1-based day of month.
    pub day: u32,
    /// One cell per employee. An empty list leaves the row untouched.
    #[serde(default)]
    pub cells: Vec<CellRequest>,
    /// The day's raw revenue value, if entered.
    #[serde(default)]
    pub revenue: Option<String>,
    /// Day-level particularity tags.
    #[serde(default)]
    pub particularity_tags: Vec<String>,
}

/// One cell in a recompute request, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellRequest {
    /// No entry.
    Empty,
    /// A work interval keyed as `HH:MM` clock times.
    Work {
        /// The start time.
        start: String,
        /// The end time.
        end: String,
        /// Whether the break deduction was requested.
        #[serde(default)]
        break_applied: bool,
    },
    /// An absence marker.
    Absence {
        /// The reason id, resolved through the store's reasons registry.
        reason_id: String,
        /// The abbreviation shown in the cell.
        abbreviation: String,
    },
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            label: req.label,
            contracted_weekly_hours: req.contracted_weekly_hours,
            overrides: req.overrides.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<OverrideRequest> for WeeklyHoursOverride {
    fn from(req: OverrideRequest) -> Self {
        WeeklyHoursOverride {
            start_date: req.start_date,
            end_date: req.end_date,
            hours: req.hours,
        }
    }
}

fn parse_clock_time(raw: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| EngineError::InvalidTime {
        value: raw.to_string(),
    })
}

impl TryFrom<CellRequest> for DayCell {
    type Error = EngineError;

    fn try_from(req: CellRequest) -> EngineResult<Self> {
        match req {
            CellRequest::Empty => Ok(DayCell::Empty),
            CellRequest::Work {
                start,
                end,
                break_applied,
            } => {
                let start = parse_clock_time(&start)?;
                let end = parse_clock_time(&end)?;
                // Impossible intervals are rejected at the boundary, before
                // the aggregator ever sees them.
                hours_between(start, end)?;
                Ok(DayCell::Work(WorkInterval {
                    start,
                    end,
                    break_applied,
                }))
            }
            CellRequest::Absence {
                reason_id,
                abbreviation,
            } => Ok(DayCell::Absence(AbsenceEntry {
                reason_id,
                abbreviation,
            })),
        }
    }
}

/// Parses a raw numeric snapshot value, degrading to 0 on garbage.
fn parse_decimal_or_zero(raw: &str, field: &str) -> Decimal {
    match raw.trim().parse::<Decimal>() {
        Ok(value) => value,
        Err(_) => {
            warn!(field, raw, "unparsable numeric value, treating as 0");
            Decimal::ZERO
        }
    }
}

fn parse_revenue(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = parse_decimal_or_zero(trimmed, "revenue");
    if value < Decimal::ZERO {
        warn!(raw, "negative revenue in snapshot, treating as 0");
        return Some(Decimal::ZERO);
    }
    Some(value.round_dp(2))
}

impl RecomputeRequest {
    /// Builds the domain grid from this snapshot.
    ///
    /// Clock times and work intervals are validated strictly (the edit path
    /// contract); revenue and carryover values parse leniently.
    pub fn into_grid(self, store: StoreProfile) -> EngineResult<RosterGrid> {
        let employees: Vec<Employee> = self.employees.into_iter().map(Into::into).collect();
        let employee_count = employees.len();
        let mut grid = RosterGrid::new(store, self.year, self.month, employees)?;

        for day_req in self.days {
            if day_req.day == 0 || day_req.day > grid.day_count() {
                return Err(EngineError::DayOutOfRange {
                    day: day_req.day,
                    days_in_month: grid.day_count(),
                });
            }
            let row = &mut grid.days[(day_req.day - 1) as usize];
            if !day_req.cells.is_empty() {
                row.cells = day_req
                    .cells
                    .into_iter()
                    .map(DayCell::try_from)
                    .collect::<EngineResult<Vec<_>>>()?;
            }
            row.revenue = day_req.revenue.as_deref().and_then(parse_revenue);
            row.particularity_tags = day_req.particularity_tags;
        }

        let mut carryover = vec![Decimal::ZERO; employee_count];
        for (idx, raw) in self.prior_month_differences.iter().enumerate() {
            if idx >= employee_count {
                warn!(
                    provided = self.prior_month_differences.len(),
                    expected = employee_count,
                    "extra prior-month difference values ignored"
                );
                break;
            }
            carryover[idx] = parse_decimal_or_zero(raw, "prior_month_difference").round_dp(2);
        }
        grid.summary.prior_month_difference = carryover;

        Ok(grid)
    }
}
