//! Built-in FBR salary tax slab tables, fiscal years 2014 through 2026.
//!
//! Fixed amounts and marginal rates reproduce the published FBR schedules
//! for salaried individuals. Brackets are stored with exclusive floors, so
//! each floor is the boundary value shared with the bracket below it.
//! Years with identical published tables share a constructor.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{SurchargeRule, TaxBracket, TaxSchedule, TaxYear};

/// The year whose schedule answers lookups for unknown years.
pub(super) const DEFAULT_YEAR: TaxYear = 2025;

/// Returns every built-in schedule, one per supported fiscal year.
pub(super) fn builtin_schedules() -> Vec<TaxSchedule> {
    vec![
        year_2014(),
        years_2015_2016(2015),
        years_2015_2016(2016),
        year_2017(),
        year_2018(),
        years_2019_2021(2019),
        years_2019_2021(2020),
        years_2019_2021(2021),
        year_2022(),
        year_2023(),
        year_2024(),
        years_2025_2026(2025),
        years_2025_2026(2026),
    ]
}

fn bracket(
    floor: Decimal,
    ceiling: Option<Decimal>,
    base_amount: Decimal,
    marginal_rate: Decimal,
) -> TaxBracket {
    TaxBracket {
        floor,
        ceiling,
        base_amount,
        marginal_rate,
    }
}

/// Finance Act 2024 slabs, unchanged for 2026; the 9% high-income
/// surcharge applies from 2025-26 onward.
fn years_2025_2026(year: TaxYear) -> TaxSchedule {
    TaxSchedule {
        year,
        exemption_threshold: dec!(600_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(600_000)), dec!(0), dec!(0)),
            bracket(dec!(600_000), Some(dec!(1_200_000)), dec!(0), dec!(0.01)),
            bracket(dec!(1_200_000), Some(dec!(2_200_000)), dec!(6_000), dec!(0.11)),
            bracket(dec!(2_200_000), Some(dec!(3_200_000)), dec!(116_000), dec!(0.23)),
            bracket(dec!(3_200_000), Some(dec!(4_100_000)), dec!(346_000), dec!(0.30)),
            bracket(dec!(4_100_000), None, dec!(616_000), dec!(0.35)),
        ],
        surcharge: Some(SurchargeRule {
            threshold: dec!(10_000_000),
            rate: dec!(0.09),
        }),
    }
}

fn year_2024() -> TaxSchedule {
    TaxSchedule {
        year: 2024,
        exemption_threshold: dec!(600_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(600_000)), dec!(0), dec!(0)),
            bracket(dec!(600_000), Some(dec!(1_200_000)), dec!(0), dec!(0.05)),
            bracket(dec!(1_200_000), Some(dec!(2_200_000)), dec!(30_000), dec!(0.15)),
            bracket(dec!(2_200_000), Some(dec!(3_200_000)), dec!(180_000), dec!(0.25)),
            bracket(dec!(3_200_000), Some(dec!(4_100_000)), dec!(430_000), dec!(0.30)),
            bracket(dec!(4_100_000), None, dec!(700_000), dec!(0.35)),
        ],
        surcharge: None,
    }
}

fn year_2023() -> TaxSchedule {
    TaxSchedule {
        year: 2023,
        exemption_threshold: dec!(600_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(600_000)), dec!(0), dec!(0)),
            bracket(dec!(600_000), Some(dec!(1_200_000)), dec!(0), dec!(0.025)),
            bracket(dec!(1_200_000), Some(dec!(2_400_000)), dec!(15_000), dec!(0.125)),
            bracket(dec!(2_400_000), Some(dec!(3_600_000)), dec!(165_000), dec!(0.225)),
            bracket(dec!(3_600_000), Some(dec!(6_000_000)), dec!(435_000), dec!(0.275)),
            bracket(dec!(6_000_000), None, dec!(1_095_000), dec!(0.35)),
        ],
        surcharge: None,
    }
}

fn year_2022() -> TaxSchedule {
    TaxSchedule {
        year: 2022,
        exemption_threshold: dec!(600_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(600_000)), dec!(0), dec!(0)),
            bracket(dec!(600_000), Some(dec!(1_200_000)), dec!(0), dec!(0.025)),
            bracket(dec!(1_200_000), Some(dec!(2_400_000)), dec!(15_000), dec!(0.125)),
            bracket(dec!(2_400_000), Some(dec!(3_600_000)), dec!(165_000), dec!(0.20)),
            bracket(dec!(3_600_000), Some(dec!(6_000_000)), dec!(405_000), dec!(0.25)),
            bracket(dec!(6_000_000), Some(dec!(12_000_000)), dec!(1_005_000), dec!(0.325)),
            bracket(dec!(12_000_000), None, dec!(2_955_000), dec!(0.35)),
        ],
        surcharge: None,
    }
}

/// The twelve-slab table introduced by the Finance Act 2019, carried
/// unchanged through fiscal 2021.
fn years_2019_2021(year: TaxYear) -> TaxSchedule {
    TaxSchedule {
        year,
        exemption_threshold: dec!(600_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(600_000)), dec!(0), dec!(0)),
            bracket(dec!(600_000), Some(dec!(1_200_000)), dec!(0), dec!(0.05)),
            bracket(dec!(1_200_000), Some(dec!(1_800_000)), dec!(30_000), dec!(0.10)),
            bracket(dec!(1_800_000), Some(dec!(2_500_000)), dec!(90_000), dec!(0.15)),
            bracket(dec!(2_500_000), Some(dec!(3_500_000)), dec!(195_000), dec!(0.175)),
            bracket(dec!(3_500_000), Some(dec!(5_000_000)), dec!(370_000), dec!(0.20)),
            bracket(dec!(5_000_000), Some(dec!(8_000_000)), dec!(670_000), dec!(0.225)),
            bracket(dec!(8_000_000), Some(dec!(12_000_000)), dec!(1_345_000), dec!(0.25)),
            bracket(dec!(12_000_000), Some(dec!(30_000_000)), dec!(2_345_000), dec!(0.275)),
            bracket(dec!(30_000_000), Some(dec!(50_000_000)), dec!(7_295_000), dec!(0.30)),
            bracket(dec!(50_000_000), Some(dec!(75_000_000)), dec!(13_295_000), dec!(0.325)),
            bracket(dec!(75_000_000), None, dec!(21_420_000), dec!(0.35)),
        ],
        surcharge: None,
    }
}

/// The 2018 table kept token fixed amounts of Rs 1,000 and Rs 2,000 on
/// the two zero-rate slabs above the exemption limit.
fn year_2018() -> TaxSchedule {
    TaxSchedule {
        year: 2018,
        exemption_threshold: dec!(400_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(400_000)), dec!(0), dec!(0)),
            bracket(dec!(400_000), Some(dec!(800_000)), dec!(1_000), dec!(0)),
            bracket(dec!(800_000), Some(dec!(1_200_000)), dec!(2_000), dec!(0)),
            bracket(dec!(1_200_000), Some(dec!(2_500_000)), dec!(2_000), dec!(0.05)),
            bracket(dec!(2_500_000), Some(dec!(4_000_000)), dec!(65_000), dec!(0.15)),
            bracket(dec!(4_000_000), Some(dec!(8_000_000)), dec!(290_000), dec!(0.20)),
            bracket(dec!(8_000_000), None, dec!(1_090_000), dec!(0.25)),
        ],
        surcharge: None,
    }
}

fn year_2017() -> TaxSchedule {
    TaxSchedule {
        year: 2017,
        exemption_threshold: dec!(400_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(400_000)), dec!(0), dec!(0)),
            bracket(dec!(400_000), Some(dec!(500_000)), dec!(0), dec!(0.02)),
            bracket(dec!(500_000), Some(dec!(750_000)), dec!(2_000), dec!(0.05)),
            bracket(dec!(750_000), Some(dec!(1_400_000)), dec!(14_500), dec!(0.10)),
            bracket(dec!(1_400_000), Some(dec!(1_500_000)), dec!(79_500), dec!(0.12)),
            bracket(dec!(1_500_000), Some(dec!(1_800_000)), dec!(92_000), dec!(0.15)),
            bracket(dec!(1_800_000), Some(dec!(2_500_000)), dec!(137_000), dec!(0.175)),
            bracket(dec!(2_500_000), Some(dec!(3_000_000)), dec!(259_500), dec!(0.20)),
            bracket(dec!(3_000_000), Some(dec!(3_500_000)), dec!(359_500), dec!(0.225)),
            bracket(dec!(3_500_000), Some(dec!(4_000_000)), dec!(472_000), dec!(0.25)),
            bracket(dec!(4_000_000), Some(dec!(7_000_000)), dec!(597_000), dec!(0.275)),
            bracket(dec!(7_000_000), None, dec!(1_422_000), dec!(0.30)),
        ],
        surcharge: None,
    }
}

/// The 2015 table, republished unchanged for fiscal 2016.
fn years_2015_2016(year: TaxYear) -> TaxSchedule {
    TaxSchedule {
        year,
        exemption_threshold: dec!(400_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(400_000)), dec!(0), dec!(0)),
            bracket(dec!(400_000), Some(dec!(500_000)), dec!(0), dec!(0.02)),
            bracket(dec!(500_000), Some(dec!(750_000)), dec!(2_000), dec!(0.05)),
            bracket(dec!(750_000), Some(dec!(1_400_000)), dec!(14_500), dec!(0.10)),
            bracket(dec!(1_400_000), Some(dec!(1_500_000)), dec!(79_500), dec!(0.125)),
            bracket(dec!(1_500_000), Some(dec!(1_800_000)), dec!(92_000), dec!(0.15)),
            bracket(dec!(1_800_000), Some(dec!(2_500_000)), dec!(137_000), dec!(0.175)),
            bracket(dec!(2_500_000), Some(dec!(3_000_000)), dec!(259_500), dec!(0.20)),
            bracket(dec!(3_000_000), Some(dec!(3_500_000)), dec!(359_500), dec!(0.225)),
            bracket(dec!(3_500_000), Some(dec!(4_000_000)), dec!(472_000), dec!(0.25)),
            bracket(dec!(4_000_000), Some(dec!(7_000_000)), dec!(597_000), dec!(0.275)),
            bracket(dec!(7_000_000), None, dec!(1_422_000), dec!(0.30)),
        ],
        surcharge: None,
    }
}

fn year_2014() -> TaxSchedule {
    TaxSchedule {
        year: 2014,
        exemption_threshold: dec!(400_000),
        brackets: vec![
            bracket(dec!(0), Some(dec!(400_000)), dec!(0), dec!(0)),
            bracket(dec!(400_000), Some(dec!(750_000)), dec!(0), dec!(0.05)),
            bracket(dec!(750_000), Some(dec!(1_400_000)), dec!(17_500), dec!(0.10)),
            bracket(dec!(1_400_000), Some(dec!(1_500_000)), dec!(82_000), dec!(0.125)),
            bracket(dec!(1_500_000), Some(dec!(1_800_000)), dec!(95_000), dec!(0.15)),
            bracket(dec!(1_800_000), Some(dec!(2_500_000)), dec!(140_000), dec!(0.175)),
            bracket(dec!(2_500_000), Some(dec!(3_000_000)), dec!(262_500), dec!(0.20)),
            bracket(dec!(3_000_000), Some(dec!(3_500_000)), dec!(362_500), dec!(0.225)),
            bracket(dec!(3_500_000), Some(dec!(4_000_000)), dec!(475_000), dec!(0.25)),
            bracket(dec!(4_000_000), Some(dec!(7_000_000)), dec!(600_000), dec!(0.275)),
            bracket(dec!(7_000_000), None, dec!(1_425_000), dec!(0.30)),
        ],
        surcharge: None,
    }
}
