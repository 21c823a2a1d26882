//! Result models for salary tax calculations.
//!
//! This module contains the [`AnnualTaxBreakdown`] and [`SalaryTaxResult`]
//! value objects. Both are constructed fresh per calculation and never
//! mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::TaxYear;

/// The annual tax breakdown produced by the bracket scan.
///
/// # Example
///
/// ```
/// use salary_tax_engine::models::AnnualTaxBreakdown;
/// use rust_decimal_macros::dec;
///
/// let breakdown = AnnualTaxBreakdown {
///     base_tax: dec!(6_000),
///     surcharge: dec!(0),
///     total_tax: dec!(6_000),
/// };
/// assert_eq!(breakdown.total_tax, breakdown.base_tax + breakdown.surcharge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualTaxBreakdown {
    /// Tax owed from the progressive bracket schedule alone.
    pub base_tax: Decimal,
    /// High-income surcharge levied on the base tax; zero when not
    /// triggered.
    pub surcharge: Decimal,
    /// The sum of base tax and surcharge.
    pub total_tax: Decimal,
}

impl AnnualTaxBreakdown {
    /// The all-zero breakdown, returned for non-positive income.
    pub const ZERO: Self = Self {
        base_tax: Decimal::ZERO,
        surcharge: Decimal::ZERO,
        total_tax: Decimal::ZERO,
    };
}

/// The complete result of a salary tax calculation.
///
/// Captures the input income, its annualization, the annual tax breakdown,
/// and the derived monthly and post-tax figures, together with the fiscal
/// year whose schedule was actually applied. When an unknown year resolves
/// through the registry's default fallback, `year` reports the fallback
/// schedule's year, so the result is indistinguishable from a direct
/// default-year calculation.
///
/// # Example
///
/// ```
/// use salary_tax_engine::models::SalaryTaxResult;
/// use rust_decimal_macros::dec;
///
/// let result = SalaryTaxResult {
///     monthly_income: dec!(100_000),
///     annual_income: dec!(1_200_000),
///     annual_base_tax: dec!(6_000),
///     annual_surcharge: dec!(0),
///     annual_tax_total: dec!(6_000),
///     monthly_tax: dec!(500),
///     annual_income_after_tax: dec!(1_194_000),
///     monthly_income_after_tax: dec!(99_500),
///     year: 2025,
/// };
/// assert_eq!(result.annual_income, result.monthly_income * dec!(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTaxResult {
    /// The monthly income the calculation was requested for.
    pub monthly_income: Decimal,
    /// Annual income, `monthly_income * 12`.
    pub annual_income: Decimal,
    /// Annual tax from the bracket schedule alone.
    pub annual_base_tax: Decimal,
    /// Annual high-income surcharge; zero when not triggered.
    pub annual_surcharge: Decimal,
    /// Total annual tax, base plus surcharge.
    pub annual_tax_total: Decimal,
    /// Total annual tax spread over twelve months.
    pub monthly_tax: Decimal,
    /// Annual income remaining after total tax.
    pub annual_income_after_tax: Decimal,
    /// Monthly income remaining after tax.
    pub monthly_income_after_tax: Decimal,
    /// The fiscal year whose schedule was applied.
    pub year: TaxYear,
}
