use std::collections::HashMap;

use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::lsp::backend::Backend;
use crate::scanner::{self, ScanState};
use crate::validation::engine::validate_document;
use crate::validation::findings::{Finding, FindingKind, Severity, ValidationResult};

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
    fn create_lsp_diagnostic(&self, finding: &Finding) -> tower_lsp::lsp_types::Diagnostic;
}

/// Trait for handling quick-fix code actions
#[tower_lsp::async_trait]
pub trait HandleCodeAction {
    async fn handle_code_action(
        &self,
        params: CodeActionParams,
    ) -> LspResult<Option<CodeActionResponse>>;
}

/// Trait for handling document symbols
#[tower_lsp::async_trait]
pub trait HandleDocumentSymbol {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>>;
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Publish diagnostics for a document
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let result = validate_document(&doc_state.content, &self.vocab);

        let diagnostics: Vec<_> = result
            .errors
            .iter()
            .chain(result.warnings.iter())
            .map(|finding| self.create_lsp_diagnostic(finding))
            .collect();
        drop(docs); // Release the lock before the async publish

        self.client.publish_diagnostics(uri, diagnostics, None).await;
    }

    fn create_lsp_diagnostic(&self, finding: &Finding) -> tower_lsp::lsp_types::Diagnostic {
        let severity = match finding.severity {
            Severity::Error => DiagnosticSeverity::ERROR,
            Severity::Warning => DiagnosticSeverity::WARNING,
        };

        // Document-level findings (brace mismatch) attach to the first line.
        let line = finding.line.unwrap_or(1).saturating_sub(1) as u32;

        tower_lsp::lsp_types::Diagnostic::new(
            Range::new(
                Position::new(line, 0),
                Position::new(line, 100), // Arbitrary end position
            ),
            Some(severity),
            Some(NumberOrString::String(finding.kind.as_str().to_string())),
            Some("css-lint-ls".to_string()),
            finding.message.clone(),
            None,
            None,
        )
    }
}

#[tower_lsp::async_trait]
impl HandleCodeAction for Backend {
    async fn handle_code_action(
        &self,
        params: CodeActionParams,
    ) -> LspResult<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let result = validate_document(&doc_state.content, &self.vocab);
        let requested_lines = params.range.start.line..=params.range.end.line;

        let mut actions = Vec::new();
        for finding in findings_in_order(&result) {
            let Some(line_num) = finding.line else {
                continue;
            };
            if !requested_lines.contains(&((line_num - 1) as u32)) {
                continue;
            }

            let Some(raw_line) = doc_state.content.lines().nth(line_num - 1) else {
                continue;
            };
            let Some(fixed_line) = suggested_line_fix(raw_line, finding) else {
                continue;
            };

            let edit = TextEdit {
                range: Range::new(
                    Position::new((line_num - 1) as u32, 0),
                    Position::new((line_num - 1) as u32, raw_line.len() as u32),
                ),
                new_text: fixed_line,
            };

            let mut changes = HashMap::new();
            changes.insert(uri.clone(), vec![edit]);

            actions.push(CodeActionOrCommand::CodeAction(CodeAction {
                title: fix_title(finding),
                kind: Some(CodeActionKind::QUICKFIX),
                diagnostics: Some(vec![self.create_lsp_diagnostic(finding)]),
                edit: Some(WorkspaceEdit {
                    changes: Some(changes),
                    ..Default::default()
                }),
                ..Default::default()
            }));
        }

        if actions.is_empty() {
            Ok(None)
        } else {
            Ok(Some(actions))
        }
    }
}

#[tower_lsp::async_trait]
impl HandleDocumentSymbol for Backend {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let mut symbols = Vec::new();
        let mut state = ScanState::new();

        for (line_idx, line) in doc_state.content.lines().enumerate() {
            let trimmed = line.trim();
            if scanner::classify(trimmed) != scanner::LineKind::Content {
                continue;
            }

            let was_inside = state.inside_rule();
            let opens_before = state.open_braces();
            state.observe_braces(trimmed);

            if was_inside || state.open_braces() == opens_before {
                continue;
            }

            // Entered a rule block on this line: report its selector.
            let selector = state.current_selector().to_string();
            if selector.is_empty() {
                continue;
            }

            let symbol_kind = match selector.chars().next() {
                Some('@') => SymbolKind::MODULE,
                Some('.') => SymbolKind::CLASS,
                Some('#') => SymbolKind::OBJECT,
                _ => SymbolKind::STRUCT,
            };

            let range = Range::new(
                Position::new(line_idx as u32, 0),
                Position::new(line_idx as u32, line.len() as u32),
            );

            let selection_range = Range::new(
                Position::new(line_idx as u32, 0),
                Position::new(line_idx as u32, selector.len() as u32),
            );

            let symbol = DocumentSymbol {
                name: selector,
                detail: None,
                kind: symbol_kind,
                tags: None,
                #[allow(deprecated)]
                deprecated: Some(false), // Required by tower-lsp 0.20, use tags instead in future versions
                range,
                selection_range,
                children: None,
            };
            symbols.push(symbol);
        }

        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }
}

/// Findings in publication order: errors first, then warnings, each as the
/// engine emitted them.
fn findings_in_order(result: &ValidationResult) -> impl Iterator<Item = &Finding> {
    result.errors.iter().chain(result.warnings.iter())
}

/// Short label for a quick-fix action.
fn fix_title(finding: &Finding) -> String {
    match (&finding.kind, &finding.suggestion) {
        (FindingKind::Syntax, _) => "Insert missing semicolon".to_string(),
        (_, Some(suggestion)) => format!("Change to '{}'", suggestion),
        _ => "Apply suggestion".to_string(),
    }
}

/// Compute the replacement text for a whole line: the suggested text
/// replaces the property (typo findings) or the value (value findings)
/// within the offending line. Missing-semicolon findings carry no engine
/// suggestion; the fix here is appending `;`.
pub fn suggested_line_fix(raw_line: &str, finding: &Finding) -> Option<String> {
    match finding.kind {
        FindingKind::Syntax => Some(format!("{};", raw_line.trim_end())),
        FindingKind::Typo => {
            let suggestion = finding.suggestion.as_deref()?;
            let decl = scanner::split_declaration(raw_line.trim())?;
            if decl.property.is_empty() {
                return None;
            }
            Some(raw_line.replacen(decl.property, suggestion, 1))
        }
        FindingKind::Spacing
        | FindingKind::InvalidUnit
        | FindingKind::ColorFormat
        | FindingKind::ColorName
        | FindingKind::ImportantSyntax => {
            let suggestion = finding.suggestion.as_deref()?;
            let decl = scanner::split_declaration(raw_line.trim())?;
            if decl.value.is_empty() {
                return None;
            }
            Some(raw_line.replacen(decl.value, suggestion, 1))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::engine::validate;

    fn finding_of_kind(result: &ValidationResult, kind: FindingKind) -> Finding {
        result
            .errors
            .iter()
            .chain(result.warnings.iter())
            .find(|f| f.kind == kind)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_fix_appends_semicolon() {
        let css = "body {\n  color: red\n}";
        let result = validate(css);
        let finding = finding_of_kind(&result, FindingKind::Syntax);

        let fixed = suggested_line_fix("  color: red", &finding).unwrap();
        assert_eq!(fixed, "  color: red;");
    }

    #[test]
    fn test_fix_replaces_property_for_typo() {
        let css = ".button {\n  colr: white;\n}";
        let result = validate(css);
        let finding = finding_of_kind(&result, FindingKind::Typo);

        let fixed = suggested_line_fix("  colr: white;", &finding).unwrap();
        assert_eq!(fixed, "  color: white;");
    }

    #[test]
    fn test_fix_replaces_value_for_spacing() {
        let css = ".a {\n  font-size: 20 px;\n}";
        let result = validate(css);
        let finding = finding_of_kind(&result, FindingKind::Spacing);

        let fixed = suggested_line_fix("  font-size: 20 px;", &finding).unwrap();
        assert_eq!(fixed, "  font-size: 20px;");
    }

    #[test]
    fn test_fix_prefixes_bare_hex() {
        let css = ".a {\n  background-color: fff;\n}";
        let result = validate(css);
        let finding = finding_of_kind(&result, FindingKind::ColorFormat);

        let fixed = suggested_line_fix("  background-color: fff;", &finding).unwrap();
        assert_eq!(fixed, "  background-color: #fff;");
    }

    #[test]
    fn test_fix_rewrites_important() {
        let css = ".a {\n  color: red !importnt;\n}";
        let result = validate(css);
        let finding = finding_of_kind(&result, FindingKind::ImportantSyntax);

        let fixed = suggested_line_fix("  color: red !importnt;", &finding).unwrap();
        assert_eq!(fixed, "  color: red !important;");
    }

    #[test]
    fn test_no_fix_for_warning_kinds() {
        let css = ".a {\n  margin: 1px 2px 3px;\n}";
        let result = validate(css);
        let finding = finding_of_kind(&result, FindingKind::Shorthand);
        assert!(suggested_line_fix("  margin: 1px 2px 3px;", &finding).is_none());
    }

    #[test]
    fn test_fix_titles() {
        let css = "body {\n  color: red\n  colr: white;\n}";
        let result = validate(css);

        let syntax = finding_of_kind(&result, FindingKind::Syntax);
        assert_eq!(fix_title(&syntax), "Insert missing semicolon");

        let typo = finding_of_kind(&result, FindingKind::Typo);
        assert_eq!(fix_title(&typo), "Change to 'color'");
    }
}
