//! Tests for LaTeX special-character escaping.
//!
//! ## Test Organization
//!
//! 1. **Character Escaping** - Special characters and the backslash rule
//! 2. **Whitespace Passes** - Solitary newlines and double spaces

use apareport::prelude::*;

// ============================================================================
// Character Escaping Tests
// ============================================================================

/// Test escaping of the percent sign.
#[test]
fn test_escape_percent() {
    assert_eq!(escape_latex("50%"), "50\\%");
}

/// Test that a backslash becomes a braced text command.
///
/// The braces of the replacement must not be re-escaped.
#[test]
fn test_escape_backslash() {
    assert_eq!(escape_latex("a\\b"), "a\\textbackslash{}b");
}

/// Test the full special character class.
#[test]
fn test_escape_character_class() {
    assert_eq!(escape_latex("#$%&_{}"), "\\#\\$\\%\\&\\_\\{\\}");
}

/// Test tilde and caret text commands.
#[test]
fn test_escape_tilde_and_caret() {
    assert_eq!(escape_latex("~"), "\\textasciitilde{}");
    assert_eq!(escape_latex("x^2"), "x\\textasciicircum{}2");
}

/// Test that plain text passes through unchanged.
#[test]
fn test_plain_text_unchanged() {
    assert_eq!(escape_latex("M = 4.21, SD = 1.30"), "M = 4.21, SD = 1.30");
}

/// Test a backslash adjacent to an escapable character.
#[test]
fn test_backslash_before_special_character() {
    assert_eq!(escape_latex("\\%"), "\\textbackslash{}\\%");
}

// ============================================================================
// Whitespace Passes Tests
// ============================================================================

/// Test that solitary newlines become LaTeX line breaks.
#[test]
fn test_solitary_newline() {
    let escaped = LatexEscaper::new().newlines().escape("line one\nline two");

    assert_eq!(escaped, "line one\\\\line two");
}

/// Test that double newlines denote paragraph breaks and pass through.
#[test]
fn test_double_newline_preserved() {
    let escaped = LatexEscaper::new()
        .newlines()
        .escape("paragraph one\n\nparagraph two");

    assert_eq!(escaped, "paragraph one\n\nparagraph two");
}

/// Test that the newline pass is off by default.
#[test]
fn test_newlines_off_by_default() {
    assert_eq!(escape_latex("a\nb"), "a\nb");
}

/// Test that double spaces become escaped double-space sequences.
#[test]
fn test_double_space() {
    let escaped = LatexEscaper::new().spaces().escape("a  b");

    assert_eq!(escaped, "a\\ \\ b");
}

/// Test both whitespace passes together.
#[test]
fn test_combined_whitespace_passes() {
    let escaped = LatexEscaper::new()
        .newlines()
        .spaces()
        .escape("a  b\nc");

    assert_eq!(escaped, "a\\ \\ b\\\\c");
}
