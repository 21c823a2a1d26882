//! Monthly salary tax calculation.
//!
//! This module annualizes a monthly income, delegates to the annual
//! bracket scan, and derives the monthly and post-tax figures shown to the
//! user.

use rust_decimal::Decimal;

use crate::models::SalaryTaxResult;
use crate::schedule::{ScheduleRegistry, TaxYear};

use super::annual_tax::compute_annual_tax;

/// Number of salary months in a fiscal year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes the full salary tax result for a monthly income.
///
/// Annualizes by a flat multiplication with [`MONTHS_PER_YEAR`] — there is
/// no pro-rating and no mid-year rate change — then computes the annual
/// breakdown and derives monthly tax and post-tax income. The result's
/// `year` field reports the schedule actually applied, so an unknown year
/// resolved through the default fallback is indistinguishable from a
/// direct default-year calculation.
///
/// Returns `None` for a non-positive monthly income, signaling "nothing to
/// compute" rather than an error.
///
/// # Arguments
///
/// * `monthly_income` - The monthly salary to tax
/// * `year` - The fiscal year whose schedule applies
/// * `registry` - The schedule registry to resolve the year against
///
/// # Examples
///
/// ```
/// use salary_tax_engine::calculation::compute_salary_tax;
/// use salary_tax_engine::schedule::ScheduleRegistry;
/// use rust_decimal_macros::dec;
///
/// let registry = ScheduleRegistry::builtin().unwrap();
///
/// let result = compute_salary_tax(dec!(100_000), 2025, &registry).unwrap();
/// assert_eq!(result.annual_tax_total, dec!(6_000));
/// assert_eq!(result.monthly_tax, dec!(500));
///
/// assert!(compute_salary_tax(dec!(0), 2025, &registry).is_none());
/// ```
pub fn compute_salary_tax(
    monthly_income: Decimal,
    year: TaxYear,
    registry: &ScheduleRegistry,
) -> Option<SalaryTaxResult> {
    if monthly_income <= Decimal::ZERO {
        return None;
    }

    let schedule_year = registry.lookup(year).year;
    let annual_income = monthly_income * MONTHS_PER_YEAR;
    let breakdown = compute_annual_tax(annual_income, schedule_year, registry);
    let annual_income_after_tax = annual_income - breakdown.total_tax;

    Some(SalaryTaxResult {
        monthly_income,
        annual_income,
        annual_base_tax: breakdown.base_tax,
        annual_surcharge: breakdown.surcharge,
        annual_tax_total: breakdown.total_tax,
        monthly_tax: breakdown.total_tax / MONTHS_PER_YEAR,
        annual_income_after_tax,
        monthly_income_after_tax: annual_income_after_tax / MONTHS_PER_YEAR,
        year: schedule_year,
    })
}
