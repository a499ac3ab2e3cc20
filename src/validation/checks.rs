//! Rule Checks
//!
//! The fixed battery of per-declaration detectors. Each check consumes a
//! classified declaration and pushes zero or more findings; none of them can
//! fail. Checks that consult the nearest-match suggester apply their own
//! acceptance threshold.

use std::sync::LazyLock;

use regex::Regex;

use crate::matcher;
use crate::scanner::Declaration;
use crate::validation::findings::{Finding, FindingKind, ValidationResult};
use crate::vocab::Vocabulary;

/// Properties whose shorthand form conventionally takes 1, 2, or 4 values.
const SHORTHAND_PROPERTIES: [&str; 3] = ["margin", "padding", "border-radius"];

/// CSS-wide keywords valid for any property, color properties included.
const CSS_WIDE_KEYWORDS: [&str; 5] = ["inherit", "initial", "unset", "revert", "revert-layer"];

/// Maximum accepted edit distance for a property-name suggestion.
const PROPERTY_TYPO_DISTANCE: usize = 2;
/// Maximum accepted edit distance for a unit suggestion.
const UNIT_TYPO_DISTANCE: usize = 1;
/// Maximum accepted edit distance for a named-color suggestion.
const COLOR_TYPO_DISTANCE: usize = 2;

/// A number followed by whitespace and a unit-like token, e.g. "20 px".
static SPACED_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+([a-z%]+)").unwrap());

/// A number with its trailing unit-like token, e.g. "20px".
static UNIT_OCCURRENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+([a-z%]+)").unwrap());

/// A bare 3- or 6-digit hex color with no `#` prefix.
static BARE_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)([0-9a-f]{3}|[0-9a-f]{6})$").unwrap());

/// Run every declaration check, in their fixed order.
pub fn check_declaration(
    line_num: usize,
    trimmed: &str,
    decl: &Declaration<'_>,
    vocab: &Vocabulary,
    result: &mut ValidationResult,
) {
    check_property_name(line_num, trimmed, decl, vocab, result);
    check_empty_value(line_num, trimmed, decl, result);
    check_value_spacing(line_num, trimmed, decl, vocab, result);
    check_units(line_num, trimmed, decl, vocab, result);
    check_color_value(line_num, trimmed, decl, vocab, result);
    check_shorthand(line_num, trimmed, decl, result);
    check_important_syntax(line_num, trimmed, decl, result);
}

/// Property-name typo detection. Custom properties (`--*`) are exempt.
fn check_property_name(
    line_num: usize,
    trimmed: &str,
    decl: &Declaration<'_>,
    vocab: &Vocabulary,
    result: &mut ValidationResult,
) {
    let property = decl.property;
    if property.starts_with("--") || vocab.is_property(property) {
        return;
    }

    match matcher::nearest(property, vocab.properties()) {
        Some(m) if m.distance <= PROPERTY_TYPO_DISTANCE => {
            result.push(
                Finding::error(
                    line_num,
                    FindingKind::Typo,
                    format!(
                        "Possible typo in property name: '{}'. Did you mean '{}'?",
                        property, m.candidate
                    ),
                    trimmed,
                )
                .with_suggestion(m.candidate),
            );
        }
        _ => {
            result.push(Finding::warning(
                line_num,
                FindingKind::UnknownProperty,
                format!("Unknown CSS property: '{}'", property),
                trimmed,
            ));
        }
    }
}

fn check_empty_value(
    line_num: usize,
    trimmed: &str,
    decl: &Declaration<'_>,
    result: &mut ValidationResult,
) {
    if decl.value.is_empty() {
        result.push(Finding::error(
            line_num,
            FindingKind::EmptyValue,
            format!("Empty value for property '{}'", decl.property),
            trimmed,
        ));
    }
}

/// Whitespace between a number and a recognized unit, e.g. "20 px".
fn check_value_spacing(
    line_num: usize,
    trimmed: &str,
    decl: &Declaration<'_>,
    vocab: &Vocabulary,
    result: &mut ValidationResult,
) {
    let value = decl.value;
    let Some(caps) = SPACED_UNIT.captures(value) else {
        return;
    };

    if vocab.is_unit(&caps[2]) {
        let suggestion = SPACED_UNIT.replace(value, "${1}${2}").into_owned();
        result.push(
            Finding::error(
                line_num,
                FindingKind::Spacing,
                format!(
                    "Invalid spacing in value: '{}'. Remove space between number and unit.",
                    value
                ),
                trimmed,
            )
            .with_suggestion(suggestion),
        );
    }
}

/// Every `<digits><letters-or-percent>` occurrence is checked independently;
/// one line can produce several unit findings.
fn check_units(
    line_num: usize,
    trimmed: &str,
    decl: &Declaration<'_>,
    vocab: &Vocabulary,
    result: &mut ValidationResult,
) {
    let value = decl.value;
    for caps in UNIT_OCCURRENCE.captures_iter(value) {
        let unit = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        if vocab.is_unit(unit) {
            continue;
        }

        match matcher::nearest(unit, vocab.units()) {
            Some(m) if m.distance <= UNIT_TYPO_DISTANCE => {
                let suggestion = value.replacen(unit, &m.candidate, 1);
                result.push(
                    Finding::error(
                        line_num,
                        FindingKind::InvalidUnit,
                        format!("Invalid CSS unit: '{}'. Did you mean '{}'?", unit, m.candidate),
                        trimmed,
                    )
                    .with_suggestion(suggestion),
                );
            }
            _ => {
                result.push(Finding::warning(
                    line_num,
                    FindingKind::UnknownUnit,
                    format!("Potentially invalid CSS unit: '{}'", unit),
                    trimmed,
                ));
            }
        }
    }
}

/// Color-value checks for properties whose name contains "color".
///
/// Functional notations (`rgb`, `hsl`, `var`), `#`-prefixed literals, and
/// CSS-wide keywords are passed through untouched.
fn check_color_value(
    line_num: usize,
    trimmed: &str,
    decl: &Declaration<'_>,
    vocab: &Vocabulary,
    result: &mut ValidationResult,
) {
    let value = decl.value;
    if !decl.property.contains("color") {
        return;
    }
    if value.starts_with('#')
        || value.starts_with("rgb")
        || value.starts_with("hsl")
        || value.starts_with("var")
        || CSS_WIDE_KEYWORDS.contains(&value)
    {
        return;
    }

    let lowered = value.to_lowercase();
    if vocab.is_named_color(&lowered) {
        return;
    }

    if BARE_HEX.is_match(value) {
        result.push(
            Finding::error(
                line_num,
                FindingKind::ColorFormat,
                format!("Missing '#' prefix for hex color: '{}'", value),
                trimmed,
            )
            .with_suggestion(format!("#{}", value)),
        );
        return;
    }

    match matcher::nearest(&lowered, vocab.colors()) {
        Some(m) if m.distance <= COLOR_TYPO_DISTANCE => {
            result.push(
                Finding::error(
                    line_num,
                    FindingKind::ColorName,
                    format!("Invalid color name: '{}'. Did you mean '{}'?", value, m.candidate),
                    trimmed,
                )
                .with_suggestion(m.candidate),
            );
        }
        _ => {
            result.push(Finding::warning(
                line_num,
                FindingKind::UnknownColor,
                format!("Potentially invalid color value: '{}'", value),
                trimmed,
            ));
        }
    }
}

/// A 3-component shorthand is flagged as likely incomplete. No suggestion;
/// it is ambiguous which value should be duplicated.
fn check_shorthand(
    line_num: usize,
    trimmed: &str,
    decl: &Declaration<'_>,
    result: &mut ValidationResult,
) {
    // Split on single spaces: runs of whitespace produce empty segments and
    // therefore a different count, which does not trigger the warning.
    if SHORTHAND_PROPERTIES.contains(&decl.property) && decl.value.split(' ').count() == 3 {
        result.push(Finding::warning(
            line_num,
            FindingKind::Shorthand,
            format!(
                "Possible incomplete shorthand value for '{}'. Shorthand properties typically use 1, 2, or 4 values.",
                decl.property
            ),
            trimmed,
        ));
    }
}

/// Anything after the first `!` must trim to exactly "important".
fn check_important_syntax(
    line_num: usize,
    trimmed: &str,
    decl: &Declaration<'_>,
    result: &mut ValidationResult,
) {
    let value = decl.value;
    let Some(bang) = value.find('!') else {
        return;
    };

    if value[bang + 1..].trim() != "important" {
        let before = value[..bang].trim();
        result.push(
            Finding::error(
                line_num,
                FindingKind::ImportantSyntax,
                format!("Invalid !important syntax: '{}'", value),
                trimmed,
            )
            .with_suggestion(format!("{} !important", before)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::findings::Severity;
    use crate::vocab::Vocabulary;

    fn run(property: &str, value: &str) -> ValidationResult {
        let vocab = Vocabulary::embedded();
        let mut result = ValidationResult::new();
        let trimmed = format!("{}: {};", property, value);
        let decl = Declaration { property, value };
        check_declaration(1, &trimmed, &decl, &vocab, &mut result);
        result
    }

    #[test]
    fn test_clean_declaration_has_no_findings() {
        let result = run("color", "red");
        assert!(result.is_clean());
    }

    #[test]
    fn test_property_typo_suggests_nearest() {
        let result = run("colr", "red");
        assert_eq!(result.errors.len(), 1);
        let finding = &result.errors[0];
        assert_eq!(finding.kind, FindingKind::Typo);
        assert_eq!(finding.suggestion.as_deref(), Some("color"));
        assert_eq!(
            finding.message,
            "Possible typo in property name: 'colr'. Did you mean 'color'?"
        );
    }

    #[test]
    fn test_far_off_property_is_a_warning() {
        let result = run("xyzzyqueryzzz", "red");
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, FindingKind::UnknownProperty);
        assert!(result.warnings[0].suggestion.is_none());
    }

    #[test]
    fn test_custom_property_is_exempt() {
        let result = run("--brand-color", "oklch(0.6 0.1 250)");
        assert!(result
            .warnings
            .iter()
            .all(|f| f.kind != FindingKind::UnknownProperty));
        assert!(result.errors.iter().all(|f| f.kind != FindingKind::Typo));
    }

    #[test]
    fn test_empty_value() {
        let result = run("color", "");
        assert!(result
            .errors
            .iter()
            .any(|f| f.kind == FindingKind::EmptyValue
                && f.message == "Empty value for property 'color'"));
    }

    #[test]
    fn test_spacing_suggestion_removes_whitespace() {
        let result = run("font-size", "20 px");
        let finding = result
            .errors
            .iter()
            .find(|f| f.kind == FindingKind::Spacing)
            .unwrap();
        assert_eq!(finding.suggestion.as_deref(), Some("20px"));
    }

    #[test]
    fn test_spacing_ignores_unknown_unit_token() {
        let result = run("font-size", "20 quux");
        assert!(result.errors.iter().all(|f| f.kind != FindingKind::Spacing));
    }

    #[test]
    fn test_invalid_unit_close_match() {
        let result = run("width", "100pxx");
        let finding = result
            .errors
            .iter()
            .find(|f| f.kind == FindingKind::InvalidUnit)
            .unwrap();
        assert_eq!(finding.suggestion.as_deref(), Some("100px"));
        assert_eq!(finding.message, "Invalid CSS unit: 'pxx'. Did you mean 'px'?");
    }

    #[test]
    fn test_unknown_unit_is_a_warning() {
        let result = run("width", "100quux");
        assert!(result
            .warnings
            .iter()
            .any(|f| f.kind == FindingKind::UnknownUnit
                && f.message == "Potentially invalid CSS unit: 'quux'"));
    }

    #[test]
    fn test_multiple_unit_findings_on_one_value() {
        let result = run("margin", "10pxx 20pxx");
        let count = result
            .errors
            .iter()
            .filter(|f| f.kind == FindingKind::InvalidUnit)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_bare_hex_gets_prefix_suggestion() {
        let result = run("background-color", "fff");
        let finding = result
            .errors
            .iter()
            .find(|f| f.kind == FindingKind::ColorFormat)
            .unwrap();
        assert_eq!(finding.suggestion.as_deref(), Some("#fff"));

        let result = run("background-color", "a1b2c3");
        assert!(result
            .errors
            .iter()
            .any(|f| f.kind == FindingKind::ColorFormat
                && f.suggestion.as_deref() == Some("#a1b2c3")));
    }

    #[test]
    fn test_color_typo_suggests_named_color() {
        let result = run("color", "whitte");
        let finding = result
            .errors
            .iter()
            .find(|f| f.kind == FindingKind::ColorName)
            .unwrap();
        assert_eq!(finding.suggestion.as_deref(), Some("white"));
    }

    #[test]
    fn test_color_pass_throughs() {
        assert!(run("color", "#fff").is_clean());
        assert!(run("color", "rgb(0, 0, 0)").is_clean());
        assert!(run("color", "hsl(120, 50%, 50%)").is_clean());
        assert!(run("color", "var(--brand)").is_clean());
        assert!(run("color", "inherit").is_clean());
        assert!(run("color", "revert-layer").is_clean());
    }

    #[test]
    fn test_named_color_case_insensitive() {
        assert!(run("color", "RebeccaPurple").is_clean());
    }

    #[test]
    fn test_unrecognizable_color_is_a_warning() {
        let result = run("color", "definitely-not-a-color");
        assert!(result
            .warnings
            .iter()
            .any(|f| f.kind == FindingKind::UnknownColor));
    }

    #[test]
    fn test_non_color_property_skips_color_check() {
        let result = run("display", "bloc");
        assert!(result.errors.iter().all(|f| f.kind != FindingKind::ColorName));
        assert!(result
            .warnings
            .iter()
            .all(|f| f.kind != FindingKind::UnknownColor));
    }

    #[test]
    fn test_three_value_shorthand_warns() {
        let result = run("margin", "10px 20px 30px");
        assert!(result
            .warnings
            .iter()
            .any(|f| f.kind == FindingKind::Shorthand && f.suggestion.is_none()));
    }

    #[test]
    fn test_other_shorthand_counts_pass() {
        assert!(run("margin", "10px").is_clean());
        assert!(run("margin", "10px 20px").is_clean());
        assert!(run("margin", "10px 20px 30px 40px").is_clean());
    }

    #[test]
    fn test_shorthand_only_for_listed_properties() {
        let result = run("transition", "opacity 1s linear");
        assert!(result
            .warnings
            .iter()
            .all(|f| f.kind != FindingKind::Shorthand));
    }

    #[test]
    fn test_important_well_formed_passes() {
        let result = run("font-weight", "bold !important");
        assert!(result.is_clean());
    }

    #[test]
    fn test_important_typo_suggests_fix() {
        let result = run("color", "red !importnt");
        let finding = result
            .errors
            .iter()
            .find(|f| f.kind == FindingKind::ImportantSyntax)
            .unwrap();
        assert_eq!(finding.suggestion.as_deref(), Some("red !important"));
        assert_eq!(finding.message, "Invalid !important syntax: 'red !importnt'");
    }

    #[test]
    fn test_important_with_space_after_bang_passes() {
        // "red ! important" trims to exactly "important" after the bang.
        let result = run("color", "red ! important");
        assert!(result
            .errors
            .iter()
            .all(|f| f.kind != FindingKind::ImportantSyntax));
    }

    #[test]
    fn test_severities_match_collections() {
        let result = run("colr", "20 px");
        assert!(result.errors.iter().all(|f| f.severity == Severity::Error));
        assert!(result
            .warnings
            .iter()
            .all(|f| f.severity == Severity::Warning));
    }
}
