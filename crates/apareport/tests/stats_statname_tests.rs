//! Tests for statistic-name to APA symbol conversion.
//!
//! ## Test Organization
//!
//! 1. **Suffix Rewriting** - The squared-suffix rule
//! 2. **Special Cases** - Paired means and omittable proportions
//! 3. **Lookup Table** - Exact-match substitutions
//! 4. **Chi Substitution** - The final chi/x pipeline step

use apareport::prelude::*;

// ============================================================================
// Suffix Rewriting Tests
// ============================================================================

/// Test the case-insensitive squared suffix.
///
/// The later chi/x substitution must not alter the `t`.
#[test]
fn test_squared_suffix() {
    assert_eq!(convert_stat_name("t-squared").as_deref(), Some("t^2"));
}

/// Test the squared suffix in upper case.
#[test]
fn test_squared_suffix_case_insensitive() {
    assert_eq!(convert_stat_name("T-SQUARED").as_deref(), Some("T^2"));
}

// ============================================================================
// Special Cases Tests
// ============================================================================

/// Test the paired-mean-difference collapse.
#[test]
fn test_paired_means() {
    let names = ["mean of x", "mean of y"];

    assert_eq!(convert_stat_names(&names).as_deref(), Some("\\Delta M"));
}

/// Test that the paired-mean rule requires exactly two elements.
#[test]
fn test_single_mean_uses_lookup() {
    assert_eq!(convert_stat_name("mean of x").as_deref(), Some("M"));
}

/// Test that proportion labels are omittable.
#[test]
fn test_proportions_omitted() {
    assert_eq!(convert_stat_names(&["prop 1", "prop 2"]), None);
    assert_eq!(convert_stat_name("prop 1"), None);
}

/// Test that empty input yields no symbol.
#[test]
fn test_empty_input() {
    assert_eq!(convert_stat_names::<&str>(&[]), None);
}

// ============================================================================
// Lookup Table Tests
// ============================================================================

/// Test the correlation substitutions.
#[test]
fn test_correlation_lookups() {
    assert_eq!(convert_stat_name("cor").as_deref(), Some("r"));
    assert_eq!(convert_stat_name("rho").as_deref(), Some("r_{\\mathrm{s}}"));
    assert_eq!(convert_stat_name("tau").as_deref(), Some("\\uptau"));
}

/// Test the location-statistic substitutions.
#[test]
fn test_location_lookups() {
    assert_eq!(convert_stat_name("(pseudo)median").as_deref(), Some("Mdn*"));
    assert_eq!(
        convert_stat_name("mean of the differences").as_deref(),
        Some("M_d")
    );
    assert_eq!(
        convert_stat_name("difference in location").as_deref(),
        Some("Mdn_d")
    );
}

/// Test the Bartlett statistic substitution.
#[test]
fn test_bartlett_lookup() {
    assert_eq!(convert_stat_name("Bartlett's K^2").as_deref(), Some("K^2"));
}

/// Test that unmatched names pass through unchanged.
#[test]
fn test_unmatched_passthrough() {
    assert_eq!(convert_stat_name("F").as_deref(), Some("F"));
    assert_eq!(convert_stat_name("t").as_deref(), Some("t"));
}

// ============================================================================
// Chi Substitution Tests
// ============================================================================

/// Test the classic chi-square statistic label.
///
/// The lookup leaves `X^2` untouched; the final step rewrites the `X`.
#[test]
fn test_chi_square_label() {
    assert_eq!(convert_stat_name("X-squared").as_deref(), Some("\\chi^2"));
}

/// Test that a literal `chi` is rewritten as a unit.
#[test]
fn test_literal_chi() {
    assert_eq!(convert_stat_name("chi-squared").as_deref(), Some("\\chi^2"));
}

/// Test that the chi substitution runs after the lookup.
///
/// `mean of x` must reach the lookup intact; rewriting its `x` first would
/// miss the table entry.
#[test]
fn test_chi_substitution_runs_after_lookup() {
    assert_eq!(convert_stat_name("mean of x").as_deref(), Some("M"));
}
