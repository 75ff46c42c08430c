//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while editing or aggregating a
//! roster grid.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the roster engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A work interval spans 24 hours or more after overnight wraparound.
    ///
    /// This is a recoverable, user-facing validation error: the attempted
    /// edit is rejected before it reaches the grid.
    #[error("Invalid work interval {start}-{end}: spans 24 hours or more")]
    InvalidInterval {
        /// The interval start time.
        start: NaiveTime,
        /// The interval end time.
        end: NaiveTime,
    },

    /// A clock-time string could not be parsed.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A revenue figure was negative.
    #[error("Invalid revenue {value}: revenue must be non-negative")]
    NegativeRevenue {
        /// The rejected value.
        value: String,
    },

    /// A day-of-month was outside the displayed month.
    #[error("Day {day} is out of range for a month of {days_in_month} days")]
    DayOutOfRange {
        /// The requested day of month (1-based).
        day: u32,
        /// The number of days in the displayed month.
        days_in_month: u32,
    },

    /// An employee id did not resolve against the grid's employee list.
    #[error("Unknown employee: {id}")]
    UnknownEmployee {
        /// The employee id that was not found.
        id: String,
    },

    /// A day row holds a different number of cells than there are employees.
    ///
    /// This is a structural-integrity violation of the grid: the engine
    /// cannot safely produce partial output and the host must refuse to save.
    #[error("Grid shape violation on {date}: expected {expected} cells, found {actual}")]
    GridShape {
        /// The date of the malformed row.
        date: NaiveDate,
        /// The number of employees in the grid.
        expected: usize,
        /// The number of cells actually present.
        actual: usize,
    },

    /// The store profile or period was invalid.
    #[error("Invalid store profile: {message}")]
    InvalidStore {
        /// A description of what made the profile invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
