//! Error types for the payroll hours engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pairing punches,
//! classifying hours, and loading configuration.

use chrono::NaiveTime;
use thiserror::Error;

/// The main error type for the payroll hours engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:99".to_string(),
///     message: "input contains invalid characters".to_string(),
/// };
/// assert!(error.to_string().contains("25:99"));
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time-of-day string could not be parsed as `HH:MM:SS`.
    #[error("Invalid time format '{value}': {message}")]
    InvalidTimeFormat {
        /// The text that failed to parse.
        value: String,
        /// A description of the parse error.
        message: String,
    },

    /// An interval had a negative duration after midnight normalization.
    ///
    /// This should never occur for intervals built by the pairing state
    /// machine; it indicates an internal invariant violation.
    #[error("Interval inversion: exit {exit} precedes entry {entry} after normalization")]
    IntervalInversion {
        /// The entry time of the inverted interval.
        entry: NaiveTime,
        /// The exit time of the inverted interval.
        exit: NaiveTime,
    },

    /// A calendar period was requested with invalid arguments.
    #[error("Invalid period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

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
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
