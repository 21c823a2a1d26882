//! Annual tax computation over a year's bracket schedule.
//!
//! This module provides the bracket-scan at the heart of the engine:
//! mapping an annual income and a fiscal year to base tax, surcharge, and
//! total tax.

use rust_decimal::Decimal;

use crate::models::AnnualTaxBreakdown;
use crate::schedule::{ScheduleRegistry, TaxSchedule, TaxYear};

/// Computes the annual tax breakdown for an annual income under a year's
/// schedule.
///
/// The year resolves through the registry, so unknown years receive the
/// default schedule. Brackets are scanned in ascending order; a bracket
/// whose ceiling the income exceeds contributes its full span, and the
/// scan stops at the bracket containing the income, where tax is the
/// bracket's cumulative base amount plus its marginal rate applied to the
/// income above the bracket floor. Income exactly at a bracket ceiling
/// belongs to that bracket, not the next.
///
/// The surcharge is levied only when the schedule defines a rule and the
/// income strictly exceeds its threshold; it is a fraction of the computed
/// base tax, not of income.
///
/// Non-positive income yields an all-zero breakdown rather than an error;
/// the computation is total over the numeric domain.
///
/// # Arguments
///
/// * `annual_income` - The annual income to tax
/// * `year` - The fiscal year whose schedule applies
/// * `registry` - The schedule registry to resolve the year against
///
/// # Examples
///
/// ```
/// use salary_tax_engine::calculation::compute_annual_tax;
/// use salary_tax_engine::schedule::ScheduleRegistry;
/// use rust_decimal_macros::dec;
///
/// let registry = ScheduleRegistry::builtin().unwrap();
///
/// let breakdown = compute_annual_tax(dec!(1_200_000), 2025, &registry);
/// assert_eq!(breakdown.base_tax, dec!(6_000));
/// assert_eq!(breakdown.surcharge, dec!(0));
/// assert_eq!(breakdown.total_tax, dec!(6_000));
/// ```
pub fn compute_annual_tax(
    annual_income: Decimal,
    year: TaxYear,
    registry: &ScheduleRegistry,
) -> AnnualTaxBreakdown {
    if annual_income <= Decimal::ZERO {
        return AnnualTaxBreakdown::ZERO;
    }

    let schedule = registry.lookup(year);
    let base_tax = base_tax_for(annual_income, schedule);

    let surcharge = match &schedule.surcharge {
        Some(rule) if annual_income > rule.threshold => base_tax * rule.rate,
        _ => Decimal::ZERO,
    };

    AnnualTaxBreakdown {
        base_tax,
        surcharge,
        total_tax: base_tax + surcharge,
    }
}

/// Scans the schedule for the bracket containing `annual_income`.
///
/// Precondition: `annual_income > 0` and the schedule's brackets are
/// contiguous with an unbounded top, so the scan always terminates inside
/// a bracket.
fn base_tax_for(annual_income: Decimal, schedule: &TaxSchedule) -> Decimal {
    let mut tax = Decimal::ZERO;

    for bracket in &schedule.brackets {
        match bracket.ceiling {
            Some(ceiling) if annual_income > ceiling => {
                tax = bracket.base_amount + (ceiling - bracket.floor) * bracket.marginal_rate;
            }
            _ => {
                tax = bracket.base_amount
                    + (annual_income - bracket.floor) * bracket.marginal_rate;
                break;
            }
        }
    }

    tax
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn registry() -> ScheduleRegistry {
        ScheduleRegistry::builtin().unwrap()
    }

    #[test]
    fn test_income_below_exemption_owes_nothing() {
        let breakdown = compute_annual_tax(dec!(480_000), 2025, &registry());
        assert_eq!(breakdown, AnnualTaxBreakdown::ZERO);
    }

    #[test]
    fn test_income_at_exemption_threshold_owes_nothing() {
        let breakdown = compute_annual_tax(dec!(600_000), 2025, &registry());
        assert_eq!(breakdown.base_tax, dec!(0));
        assert_eq!(breakdown.total_tax, dec!(0));
    }

    #[test]
    fn test_second_bracket_income() {
        let breakdown = compute_annual_tax(dec!(1_200_000), 2025, &registry());
        assert_eq!(breakdown.base_tax, dec!(6_000));
        assert_eq!(breakdown.surcharge, dec!(0));
        assert_eq!(breakdown.total_tax, dec!(6_000));
    }

    #[test]
    fn test_fifth_bracket_income() {
        // 346,000 + (3,600,000 - 3,200,000) * 0.30
        let breakdown = compute_annual_tax(dec!(3_600_000), 2025, &registry());
        assert_eq!(breakdown.base_tax, dec!(466_000));
        assert_eq!(breakdown.surcharge, dec!(0));
        assert_eq!(breakdown.total_tax, dec!(466_000));
    }

    #[test]
    fn test_top_bracket_income_with_surcharge() {
        // 616,000 + (12,000,000 - 4,100,000) * 0.35 = 3,381,000
        // surcharge: 3,381,000 * 0.09 = 304,290
        let breakdown = compute_annual_tax(dec!(12_000_000), 2025, &registry());
        assert_eq!(breakdown.base_tax, dec!(3_381_000));
        assert_eq!(breakdown.surcharge, dec!(304_290));
        assert_eq!(breakdown.total_tax, dec!(3_685_290));
    }

    #[test]
    fn test_surcharge_not_levied_at_threshold_exactly() {
        let breakdown = compute_annual_tax(dec!(10_000_000), 2025, &registry());
        assert_eq!(breakdown.surcharge, dec!(0));
        assert_eq!(breakdown.total_tax, breakdown.base_tax);
    }

    #[test]
    fn test_surcharge_levied_just_above_threshold() {
        let breakdown = compute_annual_tax(dec!(10_000_001), 2025, &registry());
        assert_eq!(breakdown.surcharge, breakdown.base_tax * dec!(0.09));
    }

    #[test]
    fn test_no_surcharge_for_years_without_a_rule() {
        let breakdown = compute_annual_tax(dec!(12_000_000), 2024, &registry());
        assert_eq!(breakdown.surcharge, dec!(0));
        assert_eq!(breakdown.total_tax, breakdown.base_tax);
    }

    #[test]
    fn test_zero_income_yields_zero_breakdown() {
        let breakdown = compute_annual_tax(dec!(0), 2025, &registry());
        assert_eq!(breakdown, AnnualTaxBreakdown::ZERO);
    }

    #[test]
    fn test_negative_income_yields_zero_breakdown() {
        let breakdown = compute_annual_tax(dec!(-50_000), 2025, &registry());
        assert_eq!(breakdown, AnnualTaxBreakdown::ZERO);
    }

    #[test]
    fn test_unknown_year_matches_default_year() {
        let registry = registry();
        let fallback = compute_annual_tax(dec!(1_200_000), 1999, &registry);
        let default = compute_annual_tax(dec!(1_200_000), registry.default_year(), &registry);
        assert_eq!(fallback, default);
    }

    #[test]
    fn test_boundary_income_belongs_to_lower_bracket() {
        // 2,200,000 is the ceiling of the 11% bracket; the 23% rate must
        // not apply to it.
        let breakdown = compute_annual_tax(dec!(2_200_000), 2025, &registry());
        assert_eq!(breakdown.base_tax, dec!(6_000) + dec!(1_000_000) * dec!(0.11));
    }

    #[test]
    fn test_continuity_across_2025_boundaries() {
        let registry = registry();
        let schedule = registry.lookup(2025).clone();

        // At each interior boundary the lower bracket's full-span tax must
        // equal the upper bracket's cumulative base amount.
        for pair in schedule.brackets.windows(2) {
            let ceiling = pair[0].ceiling.unwrap();
            let at_boundary = compute_annual_tax(ceiling, 2025, &registry);
            assert_eq!(
                at_boundary.base_tax, pair[1].base_amount,
                "discontinuity at boundary {}",
                ceiling
            );
        }
    }

    #[test]
    fn test_2024_rates_differ_from_2025() {
        let registry = registry();
        let relief_year = compute_annual_tax(dec!(1_200_000), 2025, &registry);
        let prior_year = compute_annual_tax(dec!(1_200_000), 2024, &registry);
        assert_eq!(prior_year.base_tax, dec!(30_000));
        assert_eq!(relief_year.base_tax, dec!(6_000));
    }

    #[test]
    fn test_2018_token_fixed_amounts() {
        let registry = registry();
        assert_eq!(
            compute_annual_tax(dec!(500_000), 2018, &registry).base_tax,
            dec!(1_000)
        );
        assert_eq!(
            compute_annual_tax(dec!(1_000_000), 2018, &registry).base_tax,
            dec!(2_000)
        );
        // Exactly at the 800,000 boundary the lower slab's token amount
        // applies, not the next slab's.
        assert_eq!(
            compute_annual_tax(dec!(800_000), 2018, &registry).base_tax,
            dec!(1_000)
        );
    }

    proptest! {
        #[test]
        fn prop_tax_is_monotonic_in_income(a in 0i64..60_000_000, b in 0i64..60_000_000) {
            let registry = registry();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            let lo_tax = compute_annual_tax(Decimal::from(lo), 2025, &registry).total_tax;
            let hi_tax = compute_annual_tax(Decimal::from(hi), 2025, &registry).total_tax;
            prop_assert!(lo_tax <= hi_tax);
        }

        #[test]
        fn prop_surcharge_gated_on_threshold(income in 0i64..60_000_000) {
            let registry = registry();
            let income = Decimal::from(income);
            let breakdown = compute_annual_tax(income, 2025, &registry);

            if income <= dec!(10_000_000) {
                prop_assert_eq!(breakdown.surcharge, Decimal::ZERO);
            } else {
                prop_assert_eq!(breakdown.surcharge, breakdown.base_tax * dec!(0.09));
            }
        }

        #[test]
        fn prop_total_is_base_plus_surcharge(income in -1_000_000i64..60_000_000) {
            let registry = registry();
            let breakdown = compute_annual_tax(Decimal::from(income), 2025, &registry);
            prop_assert_eq!(breakdown.total_tax, breakdown.base_tax + breakdown.surcharge);
        }
    }
}
