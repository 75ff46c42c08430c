//! Core data models for the roster engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cell;
mod employee;
mod grid;

pub use cell::{AbsenceCategory, AbsenceEntry, DayCell, WorkInterval};
pub use employee::{Employee, WeeklyHoursOverride};
pub use grid::{
    DayRow, MonthlySummary, RosterGrid, StoreProfile, SummaryRowKind, WEEKDAY_NAMES, days_in_month,
    weekday_name,
};
