//! Core data models for the Salary Tax Engine.
//!
//! This module contains the immutable result value objects produced by the
//! computation engine.

mod result;

pub use result::{AnnualTaxBreakdown, SalaryTaxResult};
