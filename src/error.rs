//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing salary input,
//! calculating a breakdown, or loading fixture files.

use thiserror::Error;

/// The main error type for the Salary Engine.
///
/// The parser and the calculator only ever produce [`EngineError::InvalidInput`].
/// The fixture variants are reserved for the fixture loader.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::invalid_input("Input cannot be empty.");
/// assert_eq!(error.to_string(), "Input cannot be empty.");
/// assert!(error.is_invalid_input());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The caller supplied a value that cannot be parsed or calculated.
    #[error("{message}")]
    InvalidInput {
        /// A human-readable description of what was wrong with the input.
        message: String,
    },

    /// Fixture file was not found at the specified path.
    #[error("Fixture file not found: {path}")]
    FixtureNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Fixture file could not be parsed.
    #[error("Failed to parse fixture file '{path}': {message}")]
    FixtureParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates an [`EngineError::InvalidInput`] with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an [`EngineError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
