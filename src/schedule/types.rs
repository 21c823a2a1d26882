//! Schedule types for salary tax calculation.
//!
//! This module contains the strongly-typed structures describing one fiscal
//! year's progressive tax rules: the bracket table, the exemption
//! threshold, and the optional high-income surcharge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A fiscal year identifier, e.g. `2025` for the 2024-25 tax year.
pub type TaxYear = u16;

/// One slice of a progressive tax schedule.
///
/// A bracket covers annual income in the range `(floor, ceiling]`; the
/// first bracket additionally covers exactly 0. Income at a shared
/// boundary therefore belongs to the lower of the two brackets.
///
/// # Example
///
/// ```
/// use salary_tax_engine::schedule::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let bracket = TaxBracket {
///     floor: dec!(600_000),
///     ceiling: Some(dec!(1_200_000)),
///     base_amount: dec!(0),
///     marginal_rate: dec!(0.01),
/// };
/// assert!(bracket.contains(dec!(1_200_000)));
/// assert!(!bracket.contains(dec!(600_000)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Exclusive lower income boundary of the bracket.
    pub floor: Decimal,
    /// Inclusive upper income bound; `None` for the unbounded top bracket.
    pub ceiling: Option<Decimal>,
    /// Cumulative tax owed on all income up to `floor`.
    pub base_amount: Decimal,
    /// Marginal rate applied to income above `floor` within this bracket.
    pub marginal_rate: Decimal,
}

impl TaxBracket {
    /// Returns whether the given annual income falls within this bracket.
    pub fn contains(&self, annual_income: Decimal) -> bool {
        let above_floor = annual_income > self.floor
            || (self.floor.is_zero() && annual_income.is_zero());
        match self.ceiling {
            Some(ceiling) => above_floor && annual_income <= ceiling,
            None => above_floor,
        }
    }

    /// Returns whether this is the unbounded top bracket.
    pub fn is_unbounded(&self) -> bool {
        self.ceiling.is_none()
    }
}

/// The high-income surcharge applied on top of computed tax.
///
/// The surcharge is a tax-on-tax: a fraction of the computed base tax,
/// levied when annual income strictly exceeds the threshold. A schedule
/// either defines both fields or carries no surcharge at all, which is why
/// they live together in one optional struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeRule {
    /// Annual income above which the surcharge applies.
    pub threshold: Decimal,
    /// Fraction of the computed base tax levied as surcharge.
    pub rate: Decimal,
}

/// One fiscal year's complete salary tax rule set.
///
/// # Example
///
/// ```
/// use salary_tax_engine::schedule::{SurchargeRule, TaxBracket, TaxSchedule};
/// use rust_decimal_macros::dec;
///
/// let schedule = TaxSchedule {
///     year: 2025,
///     exemption_threshold: dec!(600_000),
///     brackets: vec![
///         TaxBracket {
///             floor: dec!(0),
///             ceiling: Some(dec!(600_000)),
///             base_amount: dec!(0),
///             marginal_rate: dec!(0),
///         },
///         TaxBracket {
///             floor: dec!(600_000),
///             ceiling: None,
///             base_amount: dec!(0),
///             marginal_rate: dec!(0.35),
///         },
///     ],
///     surcharge: Some(SurchargeRule {
///         threshold: dec!(10_000_000),
///         rate: dec!(0.09),
///     }),
/// };
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// The fiscal year these rules apply to.
    pub year: TaxYear,
    /// Annual income below which no tax is owed.
    pub exemption_threshold: Decimal,
    /// Ordered, contiguous brackets covering all non-negative income.
    pub brackets: Vec<TaxBracket>,
    /// Optional high-income surcharge; absent for years without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge: Option<SurchargeRule>,
}

impl TaxSchedule {
    /// Checks the structural invariants of this schedule.
    ///
    /// A well-formed schedule has a non-empty bracket table starting at 0,
    /// contiguous ranges with no gaps or overlaps, exactly one unbounded
    /// bracket in the top position, every marginal rate within [0, 1], and
    /// an exemption threshold that matches the zero-rate bracket's ceiling
    /// when the schedule opens with one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] naming the first violated
    /// invariant.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidSchedule {
            year: self.year,
            message,
        };

        let Some(first) = self.brackets.first() else {
            return Err(invalid("schedule has no brackets".to_string()));
        };

        if !first.floor.is_zero() {
            return Err(invalid(format!(
                "first bracket must start at 0, found {}",
                first.floor
            )));
        }

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.marginal_rate < Decimal::ZERO || bracket.marginal_rate > Decimal::ONE {
                return Err(invalid(format!(
                    "bracket {} marginal rate {} outside [0, 1]",
                    index, bracket.marginal_rate
                )));
            }

            if bracket.base_amount < Decimal::ZERO {
                return Err(invalid(format!(
                    "bracket {} base amount {} is negative",
                    index, bracket.base_amount
                )));
            }

            let is_last = index + 1 == self.brackets.len();
            match bracket.ceiling {
                Some(ceiling) => {
                    if is_last {
                        return Err(invalid(format!(
                            "top bracket must be unbounded, found ceiling {}",
                            ceiling
                        )));
                    }
                    if ceiling <= bracket.floor {
                        return Err(invalid(format!(
                            "bracket {} ceiling {} is not above its floor {}",
                            index, ceiling, bracket.floor
                        )));
                    }
                    let next = &self.brackets[index + 1];
                    if next.floor != ceiling {
                        return Err(invalid(format!(
                            "gap or overlap between brackets {} and {}: ceiling {} vs floor {}",
                            index,
                            index + 1,
                            ceiling,
                            next.floor
                        )));
                    }
                }
                None => {
                    if !is_last {
                        return Err(invalid(format!(
                            "unbounded bracket {} is not the top bracket",
                            index
                        )));
                    }
                }
            }
        }

        if first.marginal_rate.is_zero() && first.ceiling != Some(self.exemption_threshold) {
            return Err(invalid(format!(
                "exemption threshold {} does not match the zero-rate bracket ceiling",
                self.exemption_threshold
            )));
        }

        Ok(())
    }
}
