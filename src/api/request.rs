//! Request types for the Salary Tax Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! and comparison endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::TaxYear;

/// Request body for the `/calculate` endpoint.
///
/// # Example
///
/// ```
/// use salary_tax_engine::api::CalculationRequest;
///
/// let request: CalculationRequest = serde_json::from_str(
///     r#"{"monthly_income": "100000", "year": 2025}"#,
/// ).unwrap();
/// assert_eq!(request.year, 2025);
/// assert!(!request.strict);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The monthly salary to compute tax for.
    pub monthly_income: Decimal,
    /// The fiscal year whose slab schedule applies.
    pub year: TaxYear,
    /// When set, an unsupported year is rejected instead of silently
    /// resolving to the default schedule.
    #[serde(default)]
    pub strict: bool,
}

/// Request body for the `/compare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// The monthly salary to compute tax for.
    pub monthly_income: Decimal,
    /// The fiscal years to evaluate, in display order.
    pub years: Vec<TaxYear>,
}
