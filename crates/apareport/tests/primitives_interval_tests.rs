//! Tests for the confidence-interval bounds pair.

use approx::assert_relative_eq;

use apareport::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test bound storage and the attached level.
#[test]
fn test_interval_construction() {
    let interval = Interval::new(0.7, 0.9).with_conf_level(0.95);

    assert_relative_eq!(interval.lower, 0.7, epsilon = 1e-12);
    assert_relative_eq!(interval.upper, 0.9, epsilon = 1e-12);
    assert_eq!(interval.conf_level, Some(0.95));
}

// ============================================================================
// Query Tests
// ============================================================================

/// Test the interval width.
#[test]
fn test_width() {
    let interval = Interval::new(0.6, 0.8);

    assert_relative_eq!(interval.width(), 0.2, epsilon = 1e-12);
}

/// Test the interval midpoint.
#[test]
fn test_midpoint() {
    let interval = Interval::new(0.6, 0.8);

    assert_relative_eq!(interval.midpoint(), 0.7, epsilon = 1e-12);
}

/// Test inclusive containment.
#[test]
fn test_contains() {
    let interval = Interval::new(0.6, 0.8);

    assert!(interval.contains(0.7));
    assert!(interval.contains(0.6));
    assert!(interval.contains(0.8));
    assert!(!interval.contains(0.5));
}
