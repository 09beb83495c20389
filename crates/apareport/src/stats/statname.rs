//! Statistic-name to APA symbol conversion.
//!
//! ## Purpose
//!
//! This module maps raw statistic names, as produced by generic statistical
//! computation routines, to their APA symbolic representation.
//!
//! ## Design notes
//!
//! The rules form a pipeline applied in a fixed order: squared-suffix
//! rewriting, the paired-mean special case, the omittable-proportion case,
//! exact lookup, and finally chi/x substitution. The last rule runs over the
//! lookup output as well; that ordering is part of the contract.

// External dependencies
use regex::Regex;
use std::sync::LazyLock;

/// Case-insensitive `-squared` suffix.
static SQUARED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-squared").expect("Invalid regex"));

/// Proportion labels, omittable in APA output.
static PROPORTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"prop [0-9]+").expect("Invalid regex"));

/// Literal `x` or `chi`, any case.
static CHI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)x|chi").expect("Invalid regex"));

// ============================================================================
// Conversion
// ============================================================================

/// Convert a single statistic name to its APA symbol.
///
/// Returns `None` when the statistic name is omittable.
pub fn convert_stat_name(name: &str) -> Option<String> {
    convert_stat_names(&[name])
}

/// Convert a statistic-name vector to its APA symbol.
///
/// A two-element vector containing `mean` denotes a paired mean difference
/// and collapses to `\Delta M`; a vector of proportion labels is omittable
/// and yields `None`. Any other multi-element input is mapped element-wise
/// and joined with `", "`.
pub fn convert_stat_names<S: AsRef<str>>(names: &[S]) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let names: Vec<String> = names
        .iter()
        .map(|n| SQUARED.replace_all(n.as_ref(), "^2").into_owned())
        .collect();

    if names.len() == 2 && names.iter().any(|n| n.contains("mean")) {
        return Some("\\Delta M".to_string());
    }

    if names.iter().all(|n| PROPORTION.is_match(n)) {
        return None;
    }

    let converted: Vec<String> = names
        .iter()
        .map(|n| {
            let substituted = lookup(n);
            CHI.replace_all(&substituted, r"\chi").into_owned()
        })
        .collect();

    Some(converted.join(", "))
}

// Exact-match substitution; unmatched names pass through unchanged.
fn lookup(name: &str) -> String {
    match name {
        "cor" => "r",
        "rho" => "r_{\\mathrm{s}}",
        "tau" => "\\uptau",
        "mean of x" => "M",
        "(pseudo)median" => "Mdn*",
        "mean of the differences" => "M_d",
        "difference in location" => "Mdn_d",
        "Bartlett's K^2" => "K^2",
        other => other,
    }
    .to_string()
}
