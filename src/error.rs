//! Error types for the Timesheet Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur around pay period calculation.
//! The calculator itself is total over its inputs; errors arise when loading
//! configuration, converting untrusted input, or estimating pay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Timesheet Engine.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A navigation direction other than -1 or +1 was supplied.
    #[error("Invalid direction {value}: expected -1 (previous) or 1 (next)")]
    InvalidDirection {
        /// The rejected value.
        value: i64,
    },

    /// A timesheet entry contained inconsistent data.
    #[error("Invalid timesheet entry for {date}: {message}")]
    InvalidEntry {
        /// The date of the offending entry.
        date: NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
