//! Model-term sanitization and prettification.
//!
//! ## Purpose
//!
//! This module cleans model term names two ways:
//! - **Sanitization** produces identifiers safe for structured lookup:
//!   parentheses stripped, every non-word character replaced by underscore.
//! - **Prettification** produces display names: accessor fragments and
//!   grouping characters stripped, underscores and periods spaced,
//!   interaction terms joined with a cross symbol.
//!
//! ## Invariants
//!
//! * Sanitizing an already-sanitized term is the identity.

// External dependencies
use regex::Regex;
use std::sync::LazyLock;

/// Leading standardization wrapper stripped from standardized terms.
static STANDARDIZED_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"scale\(").expect("Invalid regex"));

/// Any character outside `[0-9A-Za-z_]`.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").expect("Invalid regex"));

/// Member-access fragments such as `data$`.
static ACCESSOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+\$").expect("Invalid regex"));

// ============================================================================
// Sanitization
// ============================================================================

/// Sanitize a term name into an identifier safe for structured lookup.
///
/// With `standardized` set, a `scale(` wrapper is stripped before the
/// remaining cleanup.
pub fn sanitize_term(term: &str, standardized: bool) -> String {
    let mut t = term.to_string();
    if standardized {
        t = STANDARDIZED_WRAPPER.replace_all(&t, "").into_owned();
    }
    let t = t.replace(['(', ')'], "");
    NON_WORD.replace_all(&t, "_").into_owned()
}

/// Sanitize every term in a collection, preserving order.
pub fn sanitize_terms<S: AsRef<str>>(terms: &[S], standardized: bool) -> Vec<String> {
    terms
        .iter()
        .map(|t| sanitize_term(t.as_ref(), standardized))
        .collect()
}

// ============================================================================
// Prettification
// ============================================================================

/// Prettify a term name for display.
///
/// Strips parentheses, backticks, and member-access fragments, spaces out
/// underscores and periods, capitalizes each colon-delimited segment, and
/// joins interaction segments with `" × "`.
pub fn prettify_term(term: &str) -> String {
    let t = term.replace(['(', ')', '`'], "");
    let t = ACCESSOR.replace_all(&t, "");
    let t = t.replace(['_', '.'], " ");

    t.split(':')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" × ")
}

/// Prettify every term in a collection, preserving order.
pub fn prettify_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms.iter().map(|t| prettify_term(t.as_ref())).collect()
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
