//! Tagged value variants and their class/mode taxonomy.
//!
//! ## Purpose
//!
//! This module defines the closed set of value shapes the validator operates
//! on, replacing dynamic class/mode introspection with explicit variants
//! checked via pattern matching.
//!
//! ## Design notes
//!
//! * **Missingness**: A `Numeric` element is missing when it is NaN; `Logical`
//!   and `Text` elements carry missingness as `Option`. Infinite numeric
//!   elements are present, not missing.
//! * **Tables**: The length of a table is its column count; its dimensions
//!   are `[rows, columns]`. Vectors have a length but no dimensions.
//! * **Callables**: Carry no elements; element-wise checks do not apply.
//!
//! ## Invariants
//!
//! * `class()` and `mode()` are total over all variants.
//! * Element queries never panic on empty values.

// External dependencies
use std::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::table::Table;

// ============================================================================
// Class and Mode Taxonomy
// ============================================================================

/// Class of a value, the finer of the two type taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// Numeric vector.
    Numeric,
    /// Logical vector.
    Logical,
    /// Character vector.
    Character,
    /// Named-column table.
    Table,
    /// Callable object.
    Callable,
}

impl Display for ValueClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Logical => "logical",
            Self::Character => "character",
            Self::Table => "table",
            Self::Callable => "callable",
        };
        write!(f, "{name}")
    }
}

/// Mode of a value, the coarser storage taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// Numeric storage.
    Numeric,
    /// Logical storage.
    Logical,
    /// Character storage.
    Character,
    /// Function storage.
    Function,
    /// List storage (tables).
    List,
}

impl Display for ValueMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Logical => "logical",
            Self::Character => "character",
            Self::Function => "function",
            Self::List => "list",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Value
// ============================================================================

/// A value submitted for validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric vector; NaN encodes a missing element.
    Numeric(Vec<f64>),

    /// Logical vector; `None` encodes a missing element.
    Logical(Vec<Option<bool>>),

    /// Character vector; `None` encodes a missing element.
    Text(Vec<Option<String>>),

    /// Named-column numeric table.
    Table(Table),

    /// Callable object; carries no elements.
    Callable,
}

impl Value {
    // ========================================================================
    // Taxonomy
    // ========================================================================

    /// Class of this value.
    pub fn class(&self) -> ValueClass {
        match self {
            Self::Numeric(_) => ValueClass::Numeric,
            Self::Logical(_) => ValueClass::Logical,
            Self::Text(_) => ValueClass::Character,
            Self::Table(_) => ValueClass::Table,
            Self::Callable => ValueClass::Callable,
        }
    }

    /// Mode of this value.
    pub fn mode(&self) -> ValueMode {
        match self {
            Self::Numeric(_) => ValueMode::Numeric,
            Self::Logical(_) => ValueMode::Logical,
            Self::Text(_) => ValueMode::Character,
            Self::Table(_) => ValueMode::List,
            Self::Callable => ValueMode::Function,
        }
    }

    // ========================================================================
    // Shape Queries
    // ========================================================================

    /// Length of this value. Tables report their column count.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Logical(v) => v.len(),
            Self::Text(v) => v.len(),
            Self::Table(t) => t.n_cols(),
            Self::Callable => 1,
        }
    }

    /// Whether this value has zero elements.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Callable => false,
            _ => self.len() == 0,
        }
    }

    /// Dimensions of this value, or `None` for values without dimensions.
    pub fn dims(&self) -> Option<Vec<usize>> {
        match self {
            Self::Table(t) => Some(vec![t.n_rows(), t.n_cols()]),
            _ => None,
        }
    }

    // ========================================================================
    // Element Queries
    // ========================================================================

    /// Whether any element is missing.
    pub fn contains_missing(&self) -> bool {
        match self {
            Self::Numeric(v) => v.iter().any(|x| x.is_nan()),
            Self::Logical(v) => v.iter().any(|x| x.is_none()),
            Self::Text(v) => v.iter().any(|x| x.is_none()),
            Self::Table(t) => t.cells().any(|x| x.is_nan()),
            Self::Callable => false,
        }
    }

    /// Whether any numeric element is infinite.
    pub fn contains_infinite(&self) -> bool {
        match self {
            Self::Numeric(v) => v.iter().any(|x| x.is_infinite()),
            Self::Table(t) => t.cells().any(|x| x.is_infinite()),
            _ => false,
        }
    }

    /// Whether every numeric element has a zero fractional part.
    pub fn all_integral(&self) -> bool {
        match self {
            Self::Numeric(v) => v.iter().all(|x| x.fract() == 0.0),
            Self::Table(t) => t.cells().all(|x| x.fract() == 0.0),
            _ => true,
        }
    }

    /// Numeric elements of this value (vector elements or table cells).
    pub fn numeric_cells(&self) -> Option<Vec<f64>> {
        match self {
            Self::Numeric(v) => Some(v.clone()),
            Self::Table(t) => Some(t.cells().collect()),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Numeric(vec![x])
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Numeric(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Self::Numeric(v.to_vec())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Logical(vec![Some(b)])
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(vec![Some(s.to_string())])
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(vec![Some(s)])
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Self::Table(t)
    }
}
