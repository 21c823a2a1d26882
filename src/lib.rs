//! Salary Tax Engine for Pakistan's FBR salary tax slabs
//!
//! This crate provides the computation core behind a public salary tax
//! estimator: a versioned registry of yearly slab schedules (fiscal years
//! 2014 through 2026) and pure functions mapping a monthly income to a full
//! tax breakdown, plus the HTTP query surface the presentation layer uses.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod schedule;
