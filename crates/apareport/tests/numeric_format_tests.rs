//! Tests for number and p-value formatting.
//!
//! ## Test Organization
//!
//! 1. **Rounding and Padding** - Decimal places and zero padding
//! 2. **APA Conventions** - Leading zeros and negative zero
//! 3. **Special Values** - Infinities and missing values
//! 4. **p-Values** - Capping and range validation

use apareport::prelude::*;

// ============================================================================
// Rounding and Padding Tests
// ============================================================================

/// Test default two-decimal rendering with zero padding.
#[test]
fn test_default_two_decimals() {
    let format = NumberFormat::new();

    assert_eq!(format.format(1.0), "1.00");
    assert_eq!(format.format(2.5), "2.50");
    assert_eq!(format.format(-1.5), "-1.50");
}

/// Test configurable decimal places.
#[test]
fn test_configurable_digits() {
    assert_eq!(NumberFormat::new().digits(0).format(1.75), "2");
    assert_eq!(NumberFormat::new().digits(3).format(0.25), "0.250");
}

/// Test slice rendering preserves order.
#[test]
fn test_format_slice() {
    let formatted = NumberFormat::new().format_slice(&[1.0, 2.25]);

    assert_eq!(formatted, vec!["1.00", "2.25"]);
}

// ============================================================================
// APA Conventions Tests
// ============================================================================

/// Test leading-zero stripping for quantities bounded by one.
#[test]
fn test_gt1_strips_leading_zero() {
    let format = NumberFormat::new().gt1(false);

    assert_eq!(format.format(0.5), ".50");
    assert_eq!(format.format(-0.5), "-.50");
}

/// Test that the leading zero is kept by default.
#[test]
fn test_leading_zero_kept_by_default() {
    assert_eq!(NumberFormat::new().format(0.5), "0.50");
}

/// Test that values rounding to zero drop the negative sign.
#[test]
fn test_negative_zero_normalized() {
    assert_eq!(NumberFormat::new().format(-0.0001), "0.00");
}

// ============================================================================
// Special Values Tests
// ============================================================================

/// Test signed infinity symbols.
#[test]
fn test_infinity_symbols() {
    let format = NumberFormat::new();

    assert_eq!(format.format(f64::INFINITY), "$\\infty$");
    assert_eq!(format.format(f64::NEG_INFINITY), "-$\\infty$");
}

/// Test the missing-value placeholder.
#[test]
fn test_missing_value_placeholder() {
    assert_eq!(NumberFormat::new().format(f64::NAN), "NA");
    assert_eq!(NumberFormat::new().na_string("").format(f64::NAN), "");
}

// ============================================================================
// p-Values Tests
// ============================================================================

/// Test the standard three-decimal p-value rendering.
#[test]
fn test_p_value_rendering() {
    assert_eq!(format_p(0.03).unwrap(), ".030");
    assert_eq!(format_p(0.001).unwrap(), ".001");
}

/// Test the small-p cap.
#[test]
fn test_p_value_small_cap() {
    assert_eq!(format_p(0.0004).unwrap(), "< .001");
}

/// Test the large-p cap.
#[test]
fn test_p_value_large_cap() {
    assert_eq!(format_p(0.9999).unwrap(), "> .999");
}

/// Test that p-values outside the unit interval are rejected.
#[test]
fn test_p_value_out_of_range() {
    assert_eq!(
        format_p(1.5),
        Err(ApaError::OutOfRange {
            name: "p".to_string(),
            min: 0.0,
            max: 1.0,
        })
    );
}

/// Test that a missing p-value is rejected.
#[test]
fn test_p_value_missing() {
    assert_eq!(
        format_p(f64::NAN),
        Err(ApaError::ContainsMissing {
            name: "p".to_string()
        })
    );
}
