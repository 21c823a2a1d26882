//! The year-keyed registry of tax slab schedules.
//!
//! This module provides the [`ScheduleRegistry`] type, the immutable table
//! that answers which schedule applies to a given fiscal year.

use crate::error::{EngineError, EngineResult};

use super::data;
use super::types::{TaxSchedule, TaxYear};

/// Immutable, process-wide table of per-year tax schedules.
///
/// The registry is built once — normally from the built-in historical table
/// via [`ScheduleRegistry::builtin`] — validated up front, and then only
/// read. It has no interior mutability, so any number of threads may share
/// a reference to it without synchronization.
///
/// Lookups for years without an explicit schedule resolve to the default
/// (most recent published) schedule rather than failing; callers that need
/// strict validation use [`ScheduleRegistry::lookup_strict`] or check
/// [`ScheduleRegistry::supported_years`] first.
///
/// # Example
///
/// ```
/// use salary_tax_engine::schedule::ScheduleRegistry;
///
/// let registry = ScheduleRegistry::builtin().unwrap();
///
/// assert_eq!(registry.default_year(), 2025);
/// assert_eq!(registry.lookup(2023).year, 2023);
/// // Unknown years fall back to the default schedule.
/// assert_eq!(registry.lookup(1999).year, 2025);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleRegistry {
    /// Schedules sorted by year ascending.
    schedules: Vec<TaxSchedule>,
    /// Position of the default schedule within `schedules`.
    default_index: usize,
}

impl ScheduleRegistry {
    /// Builds the registry from the built-in FBR table (2014-2026).
    ///
    /// Every schedule is validated before the registry is handed out; a
    /// malformed table refuses to construct rather than producing wrong
    /// answers later.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if any built-in schedule
    /// violates its structural invariants.
    pub fn builtin() -> EngineResult<Self> {
        Self::new(data::builtin_schedules(), data::DEFAULT_YEAR)
    }

    /// Builds a registry from caller-supplied schedules.
    ///
    /// Schedules are sorted by year; each is validated, duplicate years are
    /// rejected, and `default_year` must name one of the supplied
    /// schedules.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidSchedule`] for a malformed or duplicated
    ///   schedule
    /// - [`EngineError::DefaultYearNotFound`] if `default_year` has no
    ///   schedule in the table
    pub fn new(mut schedules: Vec<TaxSchedule>, default_year: TaxYear) -> EngineResult<Self> {
        schedules.sort_by_key(|schedule| schedule.year);

        for schedule in &schedules {
            schedule.validate()?;
        }

        for pair in schedules.windows(2) {
            if pair[0].year == pair[1].year {
                return Err(EngineError::InvalidSchedule {
                    year: pair[0].year,
                    message: "duplicate schedule for year".to_string(),
                });
            }
        }

        let default_index = schedules
            .iter()
            .position(|schedule| schedule.year == default_year)
            .ok_or(EngineError::DefaultYearNotFound { year: default_year })?;

        Ok(Self {
            schedules,
            default_index,
        })
    }

    fn find(&self, year: TaxYear) -> Option<&TaxSchedule> {
        self.schedules.iter().find(|schedule| schedule.year == year)
    }

    /// Returns the schedule for `year`, falling back to the default
    /// schedule when the year has no explicit entry.
    ///
    /// The fallback is silent: the caller always receives a plausible
    /// schedule. Use [`ScheduleRegistry::lookup_strict`] when an unknown
    /// year should be surfaced instead.
    pub fn lookup(&self, year: TaxYear) -> &TaxSchedule {
        self.find(year).unwrap_or(&self.schedules[self.default_index])
    }

    /// Returns the schedule for `year`, or an error for unknown years.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedYear`] when `year` has no explicit
    /// schedule.
    pub fn lookup_strict(&self, year: TaxYear) -> EngineResult<&TaxSchedule> {
        self.find(year)
            .ok_or(EngineError::UnsupportedYear { year })
    }

    /// Returns the explicitly supported years in ascending order.
    pub fn supported_years(&self) -> Vec<TaxYear> {
        self.schedules.iter().map(|schedule| schedule.year).collect()
    }

    /// Returns the year whose schedule answers unknown-year lookups.
    pub fn default_year(&self) -> TaxYear {
        self.schedules[self.default_index].year
    }

    /// Returns the default schedule.
    pub fn default_schedule(&self) -> &TaxSchedule {
        &self.schedules[self.default_index]
    }

    /// Returns every schedule, sorted by year ascending.
    pub fn schedules(&self) -> &[TaxSchedule] {
        &self.schedules
    }
}
