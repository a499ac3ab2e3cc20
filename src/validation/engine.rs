//! Validation Engine
//!
//! The single left-to-right pass over a stylesheet: comment/blank skipping,
//! the missing-semicolon check, brace tracking, declaration checks, and the
//! document-level brace-mismatch finding. The engine never fails on
//! malformed input: every anomaly becomes a finding.

use crate::scanner::{self, LineKind, ScanState};
use crate::validation::checks;
use crate::validation::findings::{Finding, FindingKind, ValidationResult};
use crate::vocab::{self, Vocabulary};

/// Validate a stylesheet against the built-in vocabulary.
pub fn validate(text: &str) -> ValidationResult {
    validate_document(text, vocab::builtin())
}

/// Validate a stylesheet against an explicit vocabulary.
///
/// Pure and deterministic: identical input produces identical ordered
/// results, and concurrent calls share nothing but the read-only tables.
pub fn validate_document(text: &str, vocab: &Vocabulary) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut state = ScanState::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_num = idx + 1;
        let trimmed = raw.trim();

        if scanner::classify(trimmed) != LineKind::Content {
            continue;
        }

        // The missing-semicolon check reads the inside-rule state from
        // before this line's braces are counted, so a declaration sharing a
        // line with its selector's `{` is not flagged.
        if state.inside_rule()
            && !trimmed.ends_with('{')
            && !trimmed.ends_with('}')
            && !trimmed.ends_with(';')
            && !trimmed.contains("/*")
            && trimmed.contains(':')
        {
            result.push(Finding::error(
                line_num,
                FindingKind::Syntax,
                "Missing semicolon at the end of declaration".to_string(),
                trimmed,
            ));
        }

        state.observe_braces(trimmed);

        if state.inside_rule() && trimmed.contains(':') {
            if let Some(decl) = scanner::split_declaration(trimmed) {
                checks::check_declaration(line_num, trimmed, &decl, vocab, &mut result);
            }
        }
    }

    if !state.is_balanced() {
        result.push(Finding::document_error(
            FindingKind::Braces,
            format!(
                "Mismatched braces: {} opening braces and {} closing braces",
                state.open_braces(),
                state.close_braces()
            ),
        ));
    }

    result
}
