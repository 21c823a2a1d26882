//! Response types for the Salary Tax Engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::SalaryTaxResult;
use crate::schedule::TaxYear;

/// Successful response envelope for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The computed tax result.
    pub result: SalaryTaxResult,
}

/// Successful response envelope for the `/compare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResponse {
    /// Unique identifier for this comparison.
    pub calculation_id: Uuid,
    /// When the comparison was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the comparison.
    pub engine_version: String,
    /// One result per requested year, in request order.
    pub results: Vec<SalaryTaxResult>,
}

/// Response body for the `/years` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearsResponse {
    /// Explicitly supported fiscal years, ascending.
    pub years: Vec<TaxYear>,
    /// The year unknown lookups resolve to.
    pub default_year: TaxYear,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid income error response.
    pub fn invalid_income() -> Self {
        Self::with_details(
            "INVALID_INCOME",
            "Monthly income must be greater than zero",
            "Provide a positive monthly income to compute tax for",
        )
    }

    /// Creates an unsupported year error response.
    pub fn unsupported_year(year: TaxYear) -> Self {
        Self::with_details(
            "UNSUPPORTED_YEAR",
            format!("Tax year not supported: {}", year),
            "Query /years for the list of supported fiscal years",
        )
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

impl ApiErrorResponse {
    /// Creates an error response with the given status and body.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::UnsupportedYear { year } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::unsupported_year(year),
            },
            EngineError::InvalidSchedule { year, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SCHEDULE_ERROR",
                    "Schedule table error",
                    format!("Schedule for year {} is invalid: {}", year, message),
                ),
            },
            EngineError::DefaultYearNotFound { year } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SCHEDULE_ERROR",
                    "Schedule table error",
                    format!("Default year {} has no schedule", year),
                ),
            },
        }
    }
}
