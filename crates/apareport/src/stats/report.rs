//! Reporting fragment helpers.
//!
//! Small pure helpers for assembling APA result strings.

// ============================================================================
// Fragment Helpers
// ============================================================================

/// Prepend `"= "` to a result fragment unless it already states a relation
/// (contains `<`, `>`, or `=`).
pub fn add_equals(text: &str) -> String {
    if text.contains(['<', '>', '=']) {
        text.to_string()
    } else {
        format!("= {text}")
    }
}

/// Convert parentheses to brackets so a result string can be reported
/// inside parenthetical text.
pub fn in_paren(text: &str) -> String {
    text.replace('(', "[").replace(')', "]")
}
