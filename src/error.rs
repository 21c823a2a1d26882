//! Error types for the Salary Tax Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Tax computation itself is total and never fails; errors arise only from
//! schedule registry construction and strict year lookups.

use thiserror::Error;

use crate::schedule::TaxYear;

/// The main error type for the Salary Tax Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_tax_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedYear { year: 1999 };
/// assert_eq!(error.to_string(), "Tax year not supported: 1999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested tax year has no explicit schedule.
    #[error("Tax year not supported: {year}")]
    UnsupportedYear {
        /// The year that has no schedule.
        year: TaxYear,
    },

    /// A schedule failed construction-time validation.
    #[error("Invalid tax schedule for year {year}: {message}")]
    InvalidSchedule {
        /// The fiscal year of the malformed schedule.
        year: TaxYear,
        /// A description of the violated invariant.
        message: String,
    },

    /// The registry was built with a default year missing from its table.
    #[error("Default tax year {year} has no schedule")]
    DefaultYearNotFound {
        /// The configured default year.
        year: TaxYear,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_year_displays_year() {
        let error = EngineError::UnsupportedYear { year: 1999 };
        assert_eq!(error.to_string(), "Tax year not supported: 1999");
    }

    #[test]
    fn test_invalid_schedule_displays_year_and_message() {
        let error = EngineError::InvalidSchedule {
            year: 2025,
            message: "gap between brackets 2 and 3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid tax schedule for year 2025: gap between brackets 2 and 3"
        );
    }

    #[test]
    fn test_default_year_not_found_displays_year() {
        let error = EngineError::DefaultYearNotFound { year: 2030 };
        assert_eq!(error.to_string(), "Default tax year 2030 has no schedule");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unsupported_year() -> EngineResult<()> {
            Err(EngineError::UnsupportedYear { year: 1999 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unsupported_year()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
