//! HTTP API module for the Salary Tax Engine.
//!
//! This module provides the REST endpoints the estimator website consumes:
//! salary tax calculation, multi-year comparison, the supported-year list,
//! and the slab tables for the public rate reference page.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ComparisonRequest};
pub use response::{ApiError, CalculationResponse, ComparisonResponse, YearsResponse};
pub use state::AppState;
