//! Input validation for reporting helpers.
//!
//! ## Purpose
//!
//! This module provides the precondition-checking routine used by the
//! formatting functions before they process input. Constraints are
//! independently optional: an absent constraint is not checked, and the
//! spec is the additive AND of the constraints that are present.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violated constraint,
//!   evaluated in a fixed order for deterministic first-failure reporting.
//! * **Explicit names**: Callers pass the parameter name used in error
//!   messages; there is no call-site introspection.
//! * **Short-circuit**: With the missing-element check disabled, a value
//!   that contains a missing element validates successfully without
//!   further checks.
//!
//! ## Key concepts
//!
//! * **Check order**: missing value, dimensions, length, missing elements,
//!   finite, integral, class, mode, required columns, numeric range.
//! * **Applicability**: Element-wise numeric checks apply to numeric
//!   vectors; the range check also covers table cells; callable values
//!   carry no elements to check.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A default spec accepts any present, fully observed value.
//!
//! ## Non-goals
//!
//! * This module does not coerce, transform, or repair input values.

// Internal dependencies
use crate::primitives::errors::ApaError;
use crate::primitives::value::{Value, ValueClass, ValueMode};

// ============================================================================
// Validation Spec
// ============================================================================

/// Additive-AND validation spec: a struct of optional constraints, each
/// checked only if present, short-circuiting on the first violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSpec {
    classes: Vec<ValueClass>,
    mode: Option<ValueMode>,
    length: Option<usize>,
    dims: Option<Vec<usize>>,
    range: Option<(f64, f64)>,
    columns: Vec<String>,
    integer: bool,
    check_na: bool,
    check_infinite: bool,
}

impl Default for ValidationSpec {
    fn default() -> Self {
        Self {
            classes: Vec::new(),
            mode: None,
            length: None,
            dims: None,
            range: None,
            columns: Vec::new(),
            integer: false,
            check_na: true,
            check_infinite: true,
        }
    }
}

impl ValidationSpec {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a spec with no constraints beyond the default missing-element
    /// and finite checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a class. May be called repeatedly; the value must satisfy
    /// every required class.
    pub fn class(mut self, class: ValueClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Require a mode.
    pub fn mode(mut self, mode: ValueMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Require an exact length. Tables report their column count as length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Require exact dimensions, outermost first. Values without dimensions
    /// fail any dimension constraint.
    pub fn dims(mut self, dims: &[usize]) -> Self {
        self.dims = Some(dims.to_vec());
        self
    }

    /// Require every numeric element to lie in `[min, max]`.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Require the named columns to be present on tabular input.
    pub fn columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Require every numeric element to be a whole number.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Disable the missing-element check. A value containing a missing
    /// element then validates successfully without further checks.
    pub fn allow_missing(mut self) -> Self {
        self.check_na = false;
        self
    }

    /// Disable the finite check, permitting infinite elements.
    pub fn allow_infinite(mut self) -> Self {
        self.check_infinite = false;
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate `value` against this spec, reporting the first violated
    /// constraint. `name` identifies the parameter in error messages.
    pub fn validate(&self, value: Option<&Value>, name: &str) -> Result<(), ApaError> {
        // Check 1: Presence
        let value = match value {
            None => {
                return Err(ApaError::MissingParameter {
                    name: name.to_string(),
                })
            }
            Some(v) => v,
        };

        // Check 2: Dimensions
        if let Some(expected) = &self.dims {
            let got = value.dims();
            if got.as_ref() != Some(expected) {
                return Err(ApaError::WrongDimensions {
                    name: name.to_string(),
                    expected: expected.clone(),
                    got,
                });
            }
        }

        // Check 3: Length
        if let Some(expected) = self.length {
            let got = value.len();
            if got != expected {
                return Err(ApaError::WrongLength {
                    name: name.to_string(),
                    expected,
                    got,
                });
            }
        }

        // Check 4: Missing elements (callables carry none)
        if !matches!(value, Value::Callable) && value.contains_missing() {
            if self.check_na {
                return Err(ApaError::ContainsMissing {
                    name: name.to_string(),
                });
            }
            // Remaining checks cannot run over missing elements.
            return Ok(());
        }

        // Check 5: Finite elements
        if self.check_infinite
            && value.class() == ValueClass::Numeric
            && value.contains_infinite()
        {
            return Err(ApaError::NonFinite {
                name: name.to_string(),
            });
        }

        // Check 6: Integral elements
        if self.integer && value.class() == ValueClass::Numeric && !value.all_integral() {
            return Err(ApaError::NonIntegral {
                name: name.to_string(),
            });
        }

        // Check 7: Class membership
        for &expected in &self.classes {
            if value.class() != expected {
                return Err(ApaError::WrongClass {
                    name: name.to_string(),
                    expected,
                    got: value.class(),
                });
            }
        }

        // Check 8: Mode membership
        if let Some(expected) = self.mode {
            if value.mode() != expected {
                return Err(ApaError::WrongMode {
                    name: name.to_string(),
                    expected,
                    got: value.mode(),
                });
            }
        }

        // Check 9: Required columns
        if !self.columns.is_empty() {
            match value {
                Value::Table(table) => {
                    for column in &self.columns {
                        if !table.has_column(column) {
                            return Err(ApaError::MissingColumn {
                                name: name.to_string(),
                                column: column.clone(),
                            });
                        }
                    }
                }
                _ => {
                    return Err(ApaError::MissingColumn {
                        name: name.to_string(),
                        column: self.columns[0].clone(),
                    })
                }
            }
        }

        // Check 10: Numeric range
        if let Some((min, max)) = self.range {
            if let Some(cells) = value.numeric_cells() {
                if cells.iter().any(|&x| x < min || x > max) {
                    return Err(ApaError::OutOfRange {
                        name: name.to_string(),
                        min,
                        max,
                    });
                }
            }
        }

        Ok(())
    }
}
