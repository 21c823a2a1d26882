//! Tax slab schedules and the year-keyed schedule registry.
//!
//! This module owns the canonical table of per-year salary tax rules and
//! answers which schedule applies to a given fiscal year.
//!
//! # Example
//!
//! ```
//! use salary_tax_engine::schedule::ScheduleRegistry;
//!
//! let registry = ScheduleRegistry::builtin().unwrap();
//! let schedule = registry.lookup(2025);
//! println!("Brackets for {}: {}", schedule.year, schedule.brackets.len());
//! ```

mod data;
mod registry;
mod types;

pub use registry::ScheduleRegistry;
pub use types::{SurchargeRule, TaxBracket, TaxSchedule, TaxYear};
