//! Command-line CSS checker.
//!
//! Validates a stylesheet from a file or stdin and prints the findings as
//! human-readable text or as JSON in the shape the request boundary serves:
//! `{ success, errors, warnings }`.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use css_lint_language_server::validation::findings::{Finding, ValidationResult};
use css_lint_language_server::validation::validate_document;
use css_lint_language_server::vocab::Vocabulary;

#[derive(Debug, Parser)]
#[command(name = "css-check")]
#[command(about = "Check a CSS file for syntactic and stylistic defects")]
#[command(version)]
struct Args {
    /// CSS file to check; reads stdin when omitted
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Directory containing vocabulary extension TOML files
    #[arg(long)]
    vocab_dir: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Wire shape of a check run, matching the validation endpoint's response.
#[derive(Serialize)]
struct Report<'a> {
    success: bool,
    errors: &'a [Finding],
    warnings: &'a [Finding],
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let source = read_source(&args)?;

    let vocab = Vocabulary::with_extensions(&args.vocab_dir);
    let result = validate_document(&source, &vocab);

    match args.format {
        OutputFormat::Text => print_text(&result),
        OutputFormat::Json => print_json(&result)?,
    }

    if !result.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}

fn read_source(args: &Args) -> Result<String> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {:?}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn print_text(result: &ValidationResult) {
    for finding in &result.errors {
        print_finding("error", finding);
    }
    for finding in &result.warnings {
        print_finding("warning", finding);
    }

    println!(
        "{} error(s), {} warning(s)",
        result.errors.len(),
        result.warnings.len()
    );
}

fn print_finding(label: &str, finding: &Finding) {
    match finding.line {
        Some(line) => println!("line {}: {} [{}]: {}", line, label, finding.kind.as_str(), finding.message),
        None => println!("{} [{}]: {}", label, finding.kind.as_str(), finding.message),
    }
    if let Some(suggestion) = &finding.suggestion {
        println!("  suggestion: {}", suggestion);
    }
}

fn print_json(result: &ValidationResult) -> Result<()> {
    let report = Report {
        success: result.is_valid(),
        errors: &result.errors,
        warnings: &result.warnings,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
