//! CSS Lint Language Server
//!
//! A line-granular CSS lint engine with a Language Server Protocol boundary.
//!
//! This library provides:
//! - Heuristic CSS validation with fix suggestions
//! - Edit-distance-based nearest-match lookup
//! - LSP protocol implementation
//! - Vocabulary tables with user extensions
//! - Configuration management

pub mod config;
pub mod lsp;
pub mod matcher;
pub mod scanner;
pub mod validation;
pub mod vocab;

// Re-exports for clean public API
pub use config::Config;
pub use matcher::{nearest, Match};
pub use scanner::ScanState;
pub use validation::{validate, validate_document, Finding, FindingKind, Severity, ValidationResult};
pub use vocab::Vocabulary;
