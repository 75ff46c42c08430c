//! Presentation formatting for summary values.
//!
//! The engine stores hours and revenue at 2-decimal precision; these
//! helpers render them the way the grid displays them. Hosts may reformat.

use rust_decimal::Decimal;

/// Formats a decimal-hour value with 2 decimals and the source locale's
/// comma separator.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::format_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_hours(Decimal::from_str("6.67").unwrap()), "6,67");
/// assert_eq!(format_hours(Decimal::from_str("8").unwrap()), "8,00");
/// ```
pub fn format_hours(value: Decimal) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// Formats a revenue total with 2 decimals and the currency suffix.
///
/// # Example
///
/// ```
/// use roster_engine::calculation::format_revenue;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_revenue(Decimal::from_str("350.5").unwrap()), "350.50 €");
/// ```
pub fn format_revenue(value: Decimal) -> String {
    format!("{:.2} €", value)
}
