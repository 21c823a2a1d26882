//! Multi-year tax comparison.
//!
//! This module evaluates the same monthly income under several fiscal
//! years, backing the year-over-year comparison view of the estimator.

use rust_decimal::Decimal;

use crate::models::SalaryTaxResult;
use crate::schedule::{ScheduleRegistry, TaxYear};

use super::salary_tax::compute_salary_tax;

/// Computes the same monthly income under each of the requested years.
///
/// Years are evaluated in the order given; unknown years resolve through
/// the registry's default fallback exactly as in a single-year
/// calculation. A non-positive income produces an empty list, mirroring
/// [`compute_salary_tax`] returning `None`.
///
/// # Examples
///
/// ```
/// use salary_tax_engine::calculation::compare_salary_tax;
/// use salary_tax_engine::schedule::ScheduleRegistry;
/// use rust_decimal_macros::dec;
///
/// let registry = ScheduleRegistry::builtin().unwrap();
///
/// let results = compare_salary_tax(dec!(100_000), &[2024, 2025], &registry);
/// assert_eq!(results.len(), 2);
/// // The Finance Act 2024 rate cut: 30,000 down to 6,000 annually.
/// assert_eq!(results[0].annual_tax_total - results[1].annual_tax_total, dec!(24_000));
/// ```
pub fn compare_salary_tax(
    monthly_income: Decimal,
    years: &[TaxYear],
    registry: &ScheduleRegistry,
) -> Vec<SalaryTaxResult> {
    years
        .iter()
        .filter_map(|&year| compute_salary_tax(monthly_income, year, registry))
        .collect()
}
