//! Confidence-interval formatting.
//!
//! ## Purpose
//!
//! This module formats point-estimate bounds into APA confidence-interval
//! strings: a bounds pair yields a single string, a bounds table yields one
//! string per model term keyed by its sanitized row name.
//!
//! ## Design notes
//!
//! * **Level resolution**: An explicit level takes precedence over a level
//!   attached to the input, which takes precedence over a level derived
//!   from percentile column labels. Fractional levels are scaled to
//!   percentages.
//! * **Order**: Term order follows table row order.
//! * **Infinity cleanup**: Bound formatting can emit a doubled infinity
//!   symbol; the table path collapses it rather than altering the number
//!   formatter that produces it.
//!
//! ## Key concepts
//!
//! * **Percentile labels**: Column labels such as `2.5 %`/`97.5 %` encode
//!   the bound percentiles; the level is `100 − 2×(lower percentile)`.
//! * **Single-row collapse**: A one-row table formats to the bare string,
//!   not a one-entry mapping.
//!
//! ## Invariants
//!
//! * Every element of the input must be numeric and observed; bounds may
//!   be infinite.
//! * The level prefix is omitted when no level can be resolved.
//!
//! ## Non-goals
//!
//! * This module does not compute intervals; it only formats them.

// External dependencies
use indexmap::IndexMap;
use num_traits::Float;
use regex::Regex;
use std::sync::LazyLock;

// Internal dependencies
use crate::engine::validator::ValidationSpec;
use crate::numeric::format::NumberFormat;
use crate::primitives::errors::ApaError;
use crate::primitives::interval::Interval;
use crate::primitives::table::Table;
use crate::primitives::value::{Value, ValueClass};
use crate::text::terms::sanitize_term;

/// Everything that is not part of a decimal number.
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.0-9]").expect("Invalid regex"));

// ============================================================================
// Output
// ============================================================================

/// A formatted confidence interval: a single string, or one string per
/// model term in table row order.
#[derive(Debug, Clone, PartialEq)]
pub enum Confint {
    /// One formatted interval.
    Single(String),

    /// One formatted interval per term, keyed by sanitized term name.
    PerTerm(IndexMap<String, String>),
}

impl Confint {
    /// The bare string, when the input collapsed to one interval.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::PerTerm(_) => None,
        }
    }

    /// The formatted interval for a term, when the input was tabular.
    pub fn get(&self, term: &str) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::PerTerm(map) => map.get(term).map(String::as_str),
        }
    }

    /// Number of formatted intervals.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::PerTerm(map) => map.len(),
        }
    }

    /// Whether no intervals were formatted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// Formatter for APA confidence-interval strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfintFormatter {
    conf_level: Option<f64>,
    format: NumberFormat,
}

impl ConfintFormatter {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a formatter with no explicit level and the default number
    /// format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit confidence level, as a fraction (0.95) or
    /// percentage (95). Takes precedence over levels attached to the input.
    pub fn with_conf_level(mut self, level: f64) -> Self {
        self.conf_level = Some(level);
        self
    }

    /// Set the number format used for the bounds.
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Format a two-element bounds slice.
    pub fn format_pair<T: Float>(&self, bounds: &[T]) -> Result<String, ApaError> {
        let bounds: Vec<f64> = bounds
            .iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect();

        ValidationSpec::new()
            .class(ValueClass::Numeric)
            .length(2)
            .allow_infinite()
            .validate(Some(&Value::from(bounds.clone())), "bounds")?;

        let level = self.conf_level.map(scale_level);
        Ok(self.emit(bounds[0], bounds[1], level))
    }

    /// Format an interval, honoring its attached level when no explicit
    /// level is set.
    pub fn format_interval(&self, interval: &Interval) -> Result<String, ApaError> {
        ValidationSpec::new()
            .class(ValueClass::Numeric)
            .allow_infinite()
            .validate(
                Some(&Value::from(vec![interval.lower, interval.upper])),
                "interval",
            )?;

        let level = self.conf_level.or(interval.conf_level).map(scale_level);
        Ok(self.emit(interval.lower, interval.upper, level))
    }

    /// Format a two-column bounds table into one string per term.
    ///
    /// Term keys are the sanitized row names, or 1-based row indices when
    /// row names are absent. A single-row table collapses to the bare
    /// string.
    pub fn format_table(&self, table: &Table) -> Result<Confint, ApaError> {
        ValidationSpec::new()
            .class(ValueClass::Table)
            .length(2)
            .allow_infinite()
            .validate(Some(&Value::from(table.clone())), "table")?;

        let level = self
            .conf_level
            .or_else(|| table.conf_level())
            .or_else(|| derive_level(table))
            .map(scale_level);

        if table.n_rows() == 1 {
            let row = table.row(0);
            return Ok(Confint::Single(collapse_infinity(
                &self.emit(row[0], row[1], level),
            )));
        }

        let mut entries: IndexMap<String, String> = IndexMap::new();
        for i in 0..table.n_rows() {
            let row = table.row(i);
            let formatted = collapse_infinity(&self.emit(row[0], row[1], level));

            let key = match table.row_names().and_then(|names| names.get(i)) {
                Some(name) => sanitize_term(name, false),
                None => (i + 1).to_string(),
            };
            entries.insert(key, formatted);
        }

        Ok(Confint::PerTerm(entries))
    }

    fn emit(&self, lower: f64, upper: f64, level: Option<f64>) -> String {
        let lower = self.format.format(lower);
        let upper = self.format.format(upper);

        match level {
            Some(level) => format!("{level}% CI [{lower}, {upper}]"),
            None => format!("CI [{lower}, {upper}]"),
        }
    }
}

// ============================================================================
// Level Resolution
// ============================================================================

// Fractional levels are scaled to percentages.
fn scale_level(level: f64) -> f64 {
    if level < 1.0 {
        level * 100.0
    } else {
        level
    }
}

// Derive the level from the first column's percentile label, as
// 100 − 2×(lower percentile). Labels without digits resolve nothing.
fn derive_level(table: &Table) -> Option<f64> {
    let label = table.column_names().next()?;
    let digits = NON_NUMERIC.replace_all(label, "");
    if digits.is_empty() {
        return None;
    }
    digits
        .parse::<f64>()
        .ok()
        .map(|percentile| 100.0 - 2.0 * percentile)
}

// Bound formatting can emit a doubled infinity symbol; collapse it here
// rather than changing the formatter that produces it.
fn collapse_infinity(text: &str) -> String {
    text.replace("$\\infty$$\\infty$", "$\\infty$")
}
