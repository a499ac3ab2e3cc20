//! Line Classification
//!
//! Per-line inspection helpers: comment/blank detection, brace counting,
//! and declaration splitting. Stateless; cross-line state lives in
//! [`ScanState`](super::ScanState).

/// What a trimmed source line looks like to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace-only line
    Blank,
    /// Line whose trimmed text starts with a comment marker
    Comment,
    /// Anything else: selectors, declarations, braces
    Content,
}

/// A `property: value` pair extracted from a declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
}

/// Classify a trimmed line.
///
/// Comments are recognized only by line-leading markers (`/*`, `*/`, `//`);
/// a comment that starts mid-line does not suppress the line. Known
/// limitation of the line-granular model.
pub fn classify(trimmed: &str) -> LineKind {
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with("/*") || trimmed.starts_with("*/") || trimmed.starts_with("//") {
        LineKind::Comment
    } else {
        LineKind::Content
    }
}

/// Count `{` and `}` occurrences on a line. Multiple braces per line are
/// supported.
pub fn brace_counts(trimmed: &str) -> (usize, usize) {
    let opens = trimmed.matches('{').count();
    let closes = trimmed.matches('}').count();
    (opens, closes)
}

/// Split a declaration line at the first colon into a trimmed property and a
/// trimmed value with one trailing `;` stripped. Returns `None` when the
/// line has no colon.
pub fn split_declaration(trimmed: &str) -> Option<Declaration<'_>> {
    let colon = trimmed.find(':')?;
    let property = trimmed[..colon].trim();
    let mut value = trimmed[colon + 1..].trim();

    if let Some(stripped) = value.strip_suffix(';') {
        value = stripped.trim();
    }

    Some(Declaration { property, value })
}
