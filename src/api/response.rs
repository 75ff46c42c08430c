//! Response types for the roster engine API.
//!
//! This module defines the success payload for `/recompute` and the error
//! response structures mapping engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DifferenceSign, classify_difference, format_revenue};
use crate::error::EngineError;
use crate::models::RosterGrid;

/// The refreshed summary block returned by `/recompute`.
///
/// All hour values carry 2-decimal precision; the formatted revenue string
/// is the grid's display form, hosts may reformat from the raw total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeResponse {
    /// The store name the computation ran for.
    pub store: String,
    /// The displayed year.
    pub year: i32,
    /// The displayed month.
    pub month: u32,
    /// Effective worked hours per employee.
    pub worked: Vec<Decimal>,
    /// Vacation hour equivalents per employee.
    pub vacation: Vec<Decimal>,
    /// Ex-holiday hour equivalents per employee.
    pub ex_holiday: Vec<Decimal>,
    /// ROL hour equivalents per employee.
    pub rol: Vec<Decimal>,
    /// The signed carryover row, echoed back.
    pub prior_month_difference: Vec<Decimal>,
    /// Derived total hours per employee.
    pub total: Vec<Decimal>,
    /// Derived theoretical paid hours per employee.
    pub paid: Vec<Decimal>,
    /// Derived current-month difference per employee.
    pub current_difference: Vec<Decimal>,
    /// The sign of each current-month difference, for presentation.
    pub difference_signs: Vec<DifferenceSign>,
    /// The raw revenue total.
    pub revenue_total: Decimal,
    /// The revenue total in display form (e.g. "350.50 €").
    pub revenue_total_formatted: String,
}

impl From<&RosterGrid> for RecomputeResponse {
    fn from(grid: &RosterGrid) -> Self {
        let summary = &grid.summary;
        Self {
            store: grid.store.name.clone(),
            year: grid.year,
            month: grid.month,
            worked: summary.worked.clone(),
            vacation: summary.vacation.clone(),
            ex_holiday: summary.ex_holiday.clone(),
            rol: summary.rol.clone(),
            prior_month_difference: summary.prior_month_difference.clone(),
            total: summary.total.clone(),
            paid: summary.paid.clone(),
            current_difference: summary.current_difference.clone(),
            difference_signs: summary
                .current_difference
                .iter()
                .map(|v| classify_difference(*v))
                .collect(),
            revenue_total: summary.revenue_total,
            revenue_total_formatted: format_revenue(summary.revenue_total),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInterval { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INTERVAL",
                    format!("Invalid work interval {}-{}", start, end),
                    "A work interval must span more than 0 and less than 24 hours",
                ),
            },
            EngineError::InvalidTime { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    format!("Invalid clock time '{}'", value),
                    "Clock times must be keyed as HH:MM",
                ),
            },
            EngineError::NegativeRevenue { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "NEGATIVE_REVENUE",
                    format!("Invalid revenue {}: revenue must be non-negative", value),
                ),
            },
            EngineError::DayOutOfRange { day, days_in_month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "DAY_OUT_OF_RANGE",
                    format!(
                        "Day {} is out of range for a month of {} days",
                        day, days_in_month
                    ),
                ),
            },
            EngineError::UnknownEmployee { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("UNKNOWN_EMPLOYEE", format!("Unknown employee: {}", id)),
            },
            EngineError::GridShape {
                date,
                expected,
                actual,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "GRID_SHAPE",
                    format!("Grid shape violation on {}", date),
                    format!(
                        "Expected {} cells, found {}; the grid cannot be aggregated",
                        expected, actual
                    ),
                ),
            },
            EngineError::InvalidStore { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_STORE", message),
            },
        }
    }
}
