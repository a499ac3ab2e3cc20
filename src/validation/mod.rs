//! Validation
//!
//! The findings model, the per-declaration rule checks, and the single-pass
//! engine that ties them to the line scanner.

pub mod checks;
pub mod engine;
pub mod findings;

pub use engine::{validate, validate_document};
pub use findings::{Finding, FindingKind, Severity, ValidationResult};
