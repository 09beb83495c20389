//! High-level API for APA reporting helpers.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate: it re-exports the
//! public types of the lower layers and provides thin convenience functions
//! over the engine formatters.
//!
//! ## Design notes
//!
//! * **Thin**: Convenience functions only assemble configured formatters;
//!   all semantics live in the engine layer.
//! * **Explicit names**: Validation errors name the parameter of the
//!   convenience function that received the offending value.

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::engine::confint::{Confint, ConfintFormatter};
pub use crate::engine::validator::ValidationSpec;
pub use crate::numeric::format::{format_p, NumberFormat};
pub use crate::primitives::errors::ApaError;
pub use crate::primitives::interval::Interval;
pub use crate::primitives::table::Table;
pub use crate::primitives::value::{Value, ValueClass, ValueMode};
pub use crate::stats::report::{add_equals, in_paren};
pub use crate::stats::statname::{convert_stat_name, convert_stat_names};
pub use crate::text::latex::{escape_latex, LatexEscaper};
pub use crate::text::terms::{prettify_term, prettify_terms, sanitize_term, sanitize_terms};

// ============================================================================
// Convenience Functions
// ============================================================================

/// Format a two-element bounds slice as an APA confidence-interval string.
///
/// `conf_level` may be a fraction (0.95) or a percentage (95); without it,
/// the level prefix is omitted.
///
/// ```rust
/// use apareport::prelude::*;
///
/// let ci = print_confint(&[1.0, 2.0], Some(0.95))?;
/// assert_eq!(ci, "95% CI [1.00, 2.00]");
/// # Result::<(), ApaError>::Ok(())
/// ```
pub fn print_confint<T: Float>(bounds: &[T], conf_level: Option<f64>) -> Result<String, ApaError> {
    let mut formatter = ConfintFormatter::new();
    if let Some(level) = conf_level {
        formatter = formatter.with_conf_level(level);
    }
    formatter.format_pair(bounds)
}

/// Format a two-column bounds table as one APA confidence-interval string
/// per model term.
///
/// An explicit `conf_level` takes precedence over a level attached to the
/// table or derived from its percentile column labels. A single-row table
/// collapses to a bare string.
pub fn print_confint_table(table: &Table, conf_level: Option<f64>) -> Result<Confint, ApaError> {
    let mut formatter = ConfintFormatter::new();
    if let Some(level) = conf_level {
        formatter = formatter.with_conf_level(level);
    }
    formatter.format_table(table)
}
