//! Named-column numeric tables with optional row names.
//!
//! ## Purpose
//!
//! This module provides the tabular carrier used by the validator and the
//! confidence-interval formatter: ordered named numeric columns, optional
//! row names identifying model terms, and an optional attached confidence
//! level.
//!
//! ## Design notes
//!
//! * **Order**: Column and row order are significant in manuscript output
//!   and are preserved by `IndexMap`.
//! * **Length**: The length of a table is its column count; its dimensions
//!   are `[rows, columns]`.
//! * **Missingness**: A NaN cell encodes a missing element.
//!
//! ## Non-goals
//!
//! * This module does not validate shape consistency; the validator does.

// External dependencies
use indexmap::IndexMap;

// ============================================================================
// Table
// ============================================================================

/// Ordered named numeric columns, with optional row names and an optional
/// attached confidence level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: IndexMap<String, Vec<f64>>,
    row_names: Option<Vec<String>>,
    conf_level: Option<f64>,
}

impl Table {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named column. All columns are expected to share a length.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.insert(name.into(), values);
        self
    }

    /// Attach row names identifying the terms.
    pub fn with_row_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Attach a coverage level, as a fraction (0.95) or percentage (95).
    pub fn with_conf_level(mut self, level: f64) -> Self {
        self.conf_level = Some(level);
        self
    }

    // ========================================================================
    // Shape Queries
    // ========================================================================

    /// Number of rows (length of the first column).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, col)| col.len())
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Whether a column with the given name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// The named column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Cells of row `index` across columns, in column order. Rows beyond a
    /// column's length yield NaN.
    pub fn row(&self, index: usize) -> Vec<f64> {
        self.columns
            .values()
            .map(|col| col.get(index).copied().unwrap_or(f64::NAN))
            .collect()
    }

    /// Attached row names, if any.
    pub fn row_names(&self) -> Option<&[String]> {
        self.row_names.as_deref()
    }

    /// Attached coverage level, if any.
    pub fn conf_level(&self) -> Option<f64> {
        self.conf_level
    }

    /// All cells in column-major order.
    pub fn cells(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns.values().flatten().copied()
    }
}
