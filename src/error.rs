//! Error types for the duty rotation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its configuration layer can report.

use thiserror::Error;

/// The main error type for the duty rotation engine.
///
/// Only malformed input and configuration problems are errors. An
/// unbalanced schedule is a valid result, not an error.
///
/// # Example
///
/// ```
/// use duty_rotation::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "roster".to_string(),
///     message: "roster must not be empty".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'roster': roster must not be empty");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request could not be scheduled as given.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// A description of what made the field invalid.
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

    /// A holiday entry was not a valid month and day.
    #[error("Invalid holiday '{value}': expected a real MM-DD date")]
    InvalidHoliday {
        /// The rejected holiday text.
        value: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
