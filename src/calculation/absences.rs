//! Absence classification and hour equivalents.
//!
//! Maps an absence cell's reason id to one of the fixed categories through
//! the store's reasons registry and computes the pro-rated daily hour
//! equivalent an hour-bearing absence contributes to the summary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::ReasonRegistry;
use crate::models::{AbsenceCategory, Employee};

use super::variations::effective_weekly_hours;

/// Resolves a reason id to its absence category.
///
/// Reason registries are store-specific and may have been edited after a
/// cell was created, so an unknown id resolves to
/// [`AbsenceCategory::Other`] (non-hour-bearing) with a diagnostic log
/// rather than an error.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::classify;
/// use roster_engine::config::ReasonRegistry;
/// use roster_engine::models::AbsenceCategory;
///
/// let registry = ReasonRegistry::default();
/// assert_eq!(classify(&registry, "sconosciuto"), AbsenceCategory::Other);
/// ```
pub fn classify(registry: &ReasonRegistry, reason_id: &str) -> AbsenceCategory {
    match registry.lookup(reason_id) {
        Some(reason) => reason.category,
        None => {
            warn!(reason_id, "unknown absence reason, treating as non-hour-bearing");
            AbsenceCategory::Other
        }
    }
}

/// Computes the daily hour equivalent of an absence for a specific date.
///
/// Hour-bearing categories (vacation, ROL, ex-holiday) contribute a
/// pro-rated daily share of the weekly hours in effect on that date:
/// `effective_weekly_hours / working_days_per_week`. The `Other` category
/// contributes zero to every summary row.
///
/// The returned share is unrounded; the aggregation passes round the
/// accumulated row values to 2 decimals.
pub fn hour_equivalent_for_day(
    category: AbsenceCategory,
    employee: &Employee,
    date: NaiveDate,
    working_days_per_week: u32,
) -> Decimal {
    if !category.is_hour_bearing() {
        return Decimal::ZERO;
    }
    effective_weekly_hours(employee, date) / Decimal::from(working_days_per_week)
}
