//! Declaration-line matching and dependency-list extraction.
//!
//! Extraction is a deliberate heuristic over raw source lines, not a parse:
//! a line is a declaration iff it contains the marker substring, and the
//! dependency list is whatever sits between the first `[` and the first
//! matching `]` on that line. The rule lives behind `DeclarationMatcher` so
//! it can be tested (or swapped) independently of the file walk.

use regex::Regex;

/// Substring that marks a class declaration line. Case-sensitive.
pub const DECLARATION_MARKER: &str = "return declare";

/// Matches the first bracketed base-class list on a declaration line.
pub struct DeclarationMatcher {
    bracket_re: Regex,
}

impl DeclarationMatcher {
    pub fn new() -> Self {
        Self {
            // Lazy: first `[` to the nearest following `]`. Requires at
            // least one character between the brackets, so `[]` falls
            // through to the no-match path below.
            bracket_re: Regex::new(r"\[(.+?)\]").unwrap(),
        }
    }

    /// Extract the raw dependency tokens from a source line.
    ///
    /// Returns `None` for lines without the declaration marker. For marker
    /// lines, returns the comma-split, whitespace-trimmed contents of the
    /// first bracketed segment. A marker line with empty brackets or no
    /// brackets at all yields the single empty token `[""]`: splitting the
    /// empty string on commas produces one empty field, and callers rely on
    /// that shape (the empty token is kept in the owning class's dependency
    /// list but never seeds a placeholder record).
    pub fn extract(&self, line: &str) -> Option<Vec<String>> {
        if !line.contains(DECLARATION_MARKER) {
            return None;
        }

        let inner = self
            .bracket_re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or("");

        Some(inner.split(',').map(|t| t.trim().to_string()).collect())
    }
}

impl Default for DeclarationMatcher {
    fn default() -> Self {
        Self::new()
    }
}
