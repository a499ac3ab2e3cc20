//! Findings Model
//!
//! The data model for reported defects: severity, kind, the finding itself,
//! and the two ordered collections a validation pass produces. The wire
//! shape (`line`, `message`, `code`, `type`, `suggestion`) matches what the
//! request boundary serves to its clients.

use serde::Serialize;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// What kind of defect a finding reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    Syntax,
    Typo,
    EmptyValue,
    Spacing,
    InvalidUnit,
    UnknownUnit,
    ColorFormat,
    ColorName,
    UnknownColor,
    Shorthand,
    ImportantSyntax,
    Braces,
    UnknownProperty,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Syntax => "syntax",
            FindingKind::Typo => "typo",
            FindingKind::EmptyValue => "empty-value",
            FindingKind::Spacing => "spacing",
            FindingKind::InvalidUnit => "invalid-unit",
            FindingKind::UnknownUnit => "unknown-unit",
            FindingKind::ColorFormat => "color-format",
            FindingKind::ColorName => "color-name",
            FindingKind::UnknownColor => "unknown-color",
            FindingKind::Shorthand => "shorthand",
            FindingKind::ImportantSyntax => "important-syntax",
            FindingKind::Braces => "braces",
            FindingKind::UnknownProperty => "unknown-property",
        }
    }
}

/// One reported defect. Immutable once created.
///
/// `line` is 1-based and absent for whole-document findings (brace
/// mismatch). `suggestion` is present only when a check can constructively
/// compute a literal replacement; a guess is never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub line: Option<usize>,
    pub message: String,
    /// The trimmed source line the finding points at, when line-scoped.
    #[serde(rename = "code")]
    pub snippet: Option<String>,
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub suggestion: Option<String>,
    #[serde(skip)]
    pub severity: Severity,
}

impl Finding {
    /// Line-scoped error.
    pub fn error(line: usize, kind: FindingKind, message: String, snippet: &str) -> Self {
        Self {
            line: Some(line),
            message,
            snippet: Some(snippet.to_string()),
            kind,
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Line-scoped warning.
    pub fn warning(line: usize, kind: FindingKind, message: String, snippet: &str) -> Self {
        Self {
            line: Some(line),
            message,
            snippet: Some(snippet.to_string()),
            kind,
            suggestion: None,
            severity: Severity::Warning,
        }
    }

    /// Whole-document error with no line attribution.
    pub fn document_error(kind: FindingKind, message: String) -> Self {
        Self {
            line: None,
            message,
            snippet: None,
            kind,
            suggestion: None,
            severity: Severity::Error,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Result of validating a document: findings partitioned into errors and
/// warnings, each in first-seen order. Constructed once per validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a finding into the collection matching its severity.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    /// Whether the input passed without errors. Warnings do not invalidate.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the input produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
