//! Error types for validation and formatting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised by the validator and the
//! formatting routines: absent parameters, shape mismatches, missing or
//! non-finite elements, class/mode mismatches, missing table columns, and
//! out-of-range values.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending parameter name plus the
//!   relevant expected/actual values.
//! * **Synchronous**: All failures are immediate; there is no retry or
//!   recovery logic, and no partial results are returned.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Invariants
//!
//! * Every variant names the parameter it refers to.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::value::{ValueClass, ValueMode};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for validation and formatting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ApaError {
    /// The parameter was not supplied.
    MissingParameter {
        /// Name of the absent parameter.
        name: String,
    },

    /// Declared dimensions do not match the value's dimensions.
    WrongDimensions {
        /// Name of the parameter.
        name: String,
        /// Required dimensions, outermost first.
        expected: Vec<usize>,
        /// Actual dimensions, or `None` for values without dimensions.
        got: Option<Vec<usize>>,
    },

    /// Declared length does not match the value's length.
    WrongLength {
        /// Name of the parameter.
        name: String,
        /// Required length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// The value contains a missing element.
    ContainsMissing {
        /// Name of the parameter.
        name: String,
    },

    /// The value contains an infinite element.
    NonFinite {
        /// Name of the parameter.
        name: String,
    },

    /// The value contains an element with a non-zero fractional part.
    NonIntegral {
        /// Name of the parameter.
        name: String,
    },

    /// The value does not satisfy a required class.
    WrongClass {
        /// Name of the parameter.
        name: String,
        /// Required class.
        expected: ValueClass,
        /// Actual class.
        got: ValueClass,
    },

    /// The value does not satisfy the required mode.
    WrongMode {
        /// Name of the parameter.
        name: String,
        /// Required mode.
        expected: ValueMode,
        /// Actual mode.
        got: ValueMode,
    },

    /// A required column is absent from a tabular value.
    MissingColumn {
        /// Name of the parameter.
        name: String,
        /// First required column that is absent.
        column: String,
    },

    /// An element lies outside the permitted closed interval.
    OutOfRange {
        /// Name of the parameter.
        name: String,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// Generic invalid input with a descriptive message.
    InvalidInput(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

fn join_dims(dims: &[usize]) -> String {
    dims.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("x")
}

impl Display for ApaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingParameter { name } => {
                write!(f, "The parameter '{name}' is missing")
            }
            Self::WrongDimensions {
                name,
                expected,
                got,
            } => match got {
                Some(got) => write!(
                    f,
                    "The parameter '{name}' must have dimensions {}, got {}",
                    join_dims(expected),
                    join_dims(got)
                ),
                None => write!(
                    f,
                    "The parameter '{name}' must have dimensions {}, but has none",
                    join_dims(expected)
                ),
            },
            Self::WrongLength {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "The parameter '{name}' must have length {expected}, got {got}"
                )
            }
            Self::ContainsMissing { name } => {
                write!(f, "The parameter '{name}' contains missing values")
            }
            Self::NonFinite { name } => {
                write!(f, "The parameter '{name}' must only contain finite values")
            }
            Self::NonIntegral { name } => {
                write!(f, "The parameter '{name}' must only contain whole numbers")
            }
            Self::WrongClass {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "The parameter '{name}' must be of class '{expected}', got '{got}'"
                )
            }
            Self::WrongMode {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "The parameter '{name}' must be of mode '{expected}', got '{got}'"
                )
            }
            Self::MissingColumn { name, column } => {
                write!(f, "The parameter '{name}' is missing the column '{column}'")
            }
            Self::OutOfRange { name, min, max } => {
                write!(f, "The parameter '{name}' must be between {min} and {max}")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for ApaError {}
