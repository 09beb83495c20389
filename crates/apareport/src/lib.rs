//! # apareport — APA-style statistical reporting helpers for Rust
//!
//! Text-formatting and validation helpers supporting generation of
//! statistical result strings for manuscript preparation in APA style:
//! input validation, confidence-interval and statistic-name formatting,
//! model-term sanitization, and LaTeX escaping.
//!
//! ## Quick Start
//!
//! ```rust
//! use apareport::prelude::*;
//!
//! // Format a confidence interval for a point estimate
//! let ci = print_confint(&[0.12, 0.85], Some(0.95))?;
//! assert_eq!(ci, "95% CI [0.12, 0.85]");
//!
//! // Map a raw statistic name to its APA symbol
//! let symbol = convert_stat_name("rho");
//! assert_eq!(symbol.as_deref(), Some("r_{\\mathrm{s}}"));
//!
//! // Clean a model term for display
//! assert_eq!(prettify_term("Factor A:Factor B"), "Factor A × Factor B");
//! # Result::<(), ApaError>::Ok(())
//! ```
//!
//! ## Validating Inputs
//!
//! Formatting functions validate their inputs before processing them; the
//! same machinery is available to callers. Constraints are independently
//! optional and checked in a fixed order, failing fast with an error that
//! names the offending parameter:
//!
//! ```rust
//! use apareport::prelude::*;
//!
//! let estimates = Value::from(vec![0.2, 0.4, 0.9]);
//!
//! ValidationSpec::new()
//!     .class(ValueClass::Numeric)
//!     .length(3)
//!     .range(0.0, 1.0)
//!     .validate(Some(&estimates), "estimates")?;
//! # Result::<(), ApaError>::Ok(())
//! ```
//!
//! ## Coefficient Tables
//!
//! A two-column bounds table formats to one interval string per model term,
//! keyed by the sanitized term name and preserving row order:
//!
//! ```rust
//! use apareport::prelude::*;
//!
//! let table = Table::new()
//!     .with_column("2.5 %", vec![0.1, -0.3])
//!     .with_column("97.5 %", vec![0.9, 0.7])
//!     .with_row_names(["(Intercept)", "Factor A"]);
//!
//! let formatted = print_confint_table(&table, None)?;
//! assert_eq!(formatted.get("Intercept"), Some("95% CI [0.10, 0.90]"));
//! assert_eq!(formatted.get("Factor_A"), Some("95% CI [-0.30, 0.70]"));
//! # Result::<(), ApaError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns `Result<_, ApaError>`. Failures are
//! synchronous and descriptive; there is no retry or recovery logic, and no
//! partial results are returned.

// Layer 1: Primitives - errors, values, intervals, tables.
mod primitives;

// Layer 2: Text - pure string transformations.
mod text;

// Layer 3: Numeric - number and p-value rendering.
mod numeric;

// Layer 4: Stats - statistic names and reporting fragments.
mod stats;

// Layer 5: Engine - validation and confidence-interval formatting.
mod engine;

// High-level public API.
mod api;

// Standard reporting prelude.
pub mod prelude {
    pub use crate::api::{
        add_equals, convert_stat_name, convert_stat_names, escape_latex, format_p, in_paren,
        prettify_term, prettify_terms, print_confint, print_confint_table, sanitize_term,
        sanitize_terms, ApaError, Confint, ConfintFormatter, Interval, LatexEscaper, NumberFormat,
        Table, ValidationSpec, Value, ValueClass, ValueMode,
    };
}
