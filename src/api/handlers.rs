//! HTTP request handlers for the Salary Tax Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compare_salary_tax, compute_salary_tax};
use crate::schedule::{TaxSchedule, TaxYear};

use super::request::{CalculationRequest, ComparisonRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, ComparisonResponse, YearsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/compare", post(compare_handler))
        .route("/years", get(years_handler))
        .route("/slabs", get(slabs_handler))
        .route("/slabs/:year", get(slab_for_year_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a typed API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /calculate endpoint.
///
/// Accepts a monthly income and fiscal year, returning the full salary tax
/// result. Unknown years resolve to the default schedule unless the
/// request sets `strict`.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if request.monthly_income <= Decimal::ZERO {
        warn!(
            correlation_id = %correlation_id,
            monthly_income = %request.monthly_income,
            "Rejected non-positive income"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::invalid_income()),
        )
            .into_response();
    }

    if request.strict {
        if let Err(err) = state.registry().lookup_strict(request.year) {
            warn!(
                correlation_id = %correlation_id,
                year = request.year,
                "Rejected unsupported year in strict mode"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    }

    match compute_salary_tax(request.monthly_income, request.year, state.registry()) {
        Some(result) => {
            info!(
                correlation_id = %correlation_id,
                year = result.year,
                annual_tax_total = %result.annual_tax_total,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    result,
                }),
            )
                .into_response()
        }
        None => (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::invalid_income()),
        )
            .into_response(),
    }
}

/// Handler for the POST /compare endpoint.
///
/// Evaluates the same monthly income under each requested year.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if request.monthly_income <= Decimal::ZERO {
        warn!(
            correlation_id = %correlation_id,
            monthly_income = %request.monthly_income,
            "Rejected non-positive income"
        );
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::invalid_income()),
        )
            .into_response();
    }

    if request.years.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            Json(ApiError::validation_error("years must not be empty")),
        )
            .into_response();
    }

    let results = compare_salary_tax(request.monthly_income, &request.years, state.registry());
    info!(
        correlation_id = %correlation_id,
        years_count = results.len(),
        "Comparison completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ComparisonResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            results,
        }),
    )
        .into_response()
}

/// Handler for the GET /years endpoint.
///
/// Returns the supported fiscal years for the year selector.
async fn years_handler(State(state): State<AppState>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: state.registry().supported_years(),
        default_year: state.registry().default_year(),
    })
}

/// Handler for the GET /slabs endpoint.
///
/// Returns every schedule, newest first, as the public rate-table page
/// displays them.
async fn slabs_handler(State(state): State<AppState>) -> Json<Vec<TaxSchedule>> {
    let mut schedules: Vec<TaxSchedule> = state.registry().schedules().to_vec();
    schedules.reverse();
    Json(schedules)
}

/// Handler for the GET /slabs/{year} endpoint.
///
/// Strict by design: the rate-table page must not render fallback data
/// under the wrong heading, so unknown years are a 404.
async fn slab_for_year_handler(
    State(state): State<AppState>,
    Path(year): Path<TaxYear>,
) -> impl IntoResponse {
    match state.registry().lookup_strict(year) {
        Ok(schedule) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(schedule.clone()),
        )
            .into_response(),
        Err(_) => ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::unsupported_year(year))
            .into_response(),
    }
}
