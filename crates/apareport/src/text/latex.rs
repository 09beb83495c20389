//! LaTeX special-character escaping.
//!
//! ## Purpose
//!
//! This module escapes text for safe rendering in LaTeX documents: the
//! backslash, the character class `#$%&_{}`, tilde, and caret, plus two
//! optional whitespace passes for line breaks and double spaces.
//!
//! ## Design notes
//!
//! * **Single pass**: Characters are mapped in one scan, so the braces of
//!   the inserted `\textbackslash{}` are never re-escaped by the brace
//!   rules. This is the same result the ordered multi-pass substitution
//!   produces.
//! * **Paragraphs**: Only solitary newlines become LaTeX line breaks;
//!   double newlines denote paragraph breaks and pass through.

// ============================================================================
// Escaper
// ============================================================================

/// Configurable LaTeX escaper.
///
/// The default configuration escapes special characters only. The optional
/// passes convert solitary newlines to LaTeX line breaks and double spaces
/// to escaped double-space sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatexEscaper {
    newlines: bool,
    spaces: bool,
}

impl LatexEscaper {
    /// Create an escaper with both whitespace passes disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert solitary newlines to LaTeX line breaks (`\\`).
    pub fn newlines(mut self) -> Self {
        self.newlines = true;
        self
    }

    /// Convert double spaces to escaped double-space sequences (`\ \ `).
    pub fn spaces(mut self) -> Self {
        self.spaces = true;
        self
    }

    /// Escape `text` for LaTeX.
    pub fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '\\' => out.push_str("\\textbackslash{}"),
                '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                    out.push('\\');
                    out.push(ch);
                }
                '~' => out.push_str("\\textasciitilde{}"),
                '^' => out.push_str("\\textasciicircum{}"),
                _ => out.push(ch),
            }
        }

        // Whitespace passes run after character escaping; none of the
        // inserted escape sequences contain newlines or double spaces.
        if self.newlines {
            out = escape_solitary_newlines(&out);
        }
        if self.spaces {
            out = out.replace("  ", "\\ \\ ");
        }

        out
    }
}

/// Escape `text` for LaTeX with the default configuration.
pub fn escape_latex(text: &str) -> String {
    LatexEscaper::new().escape(text)
}

// Replace newlines that are neither preceded nor followed by another
// newline. Needs one character of context on each side, which `regex`
// lookaround cannot express, so this is a hand scan.
fn escape_solitary_newlines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '\n' {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();
            if prev != Some('\n') && next != Some('\n') {
                out.push_str("\\\\");
                continue;
            }
        }
        out.push(ch);
    }

    out
}
