//! Tests for row normalization

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn row(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

// ============================================================================
// Field Cleaning Tests
// ============================================================================

#[test_case("\"747211\" ", "747211" ; "quoted with trailing space")]
#[test_case("1,5", "1" ; "decimal comma truncated")]
#[test_case("12.75", "12" ; "decimal point truncated")]
#[test_case(" 12 34 ", "1234" ; "internal whitespace removed")]
#[test_case("\"1,0\"", "1" ; "quoted decimal")]
#[test_case("1 000,50", "1000" ; "thousands separator space")]
#[test_case("AB-12/X", "AB-12/X" ; "alphanumeric identifier kept")]
#[test_case("\"\"5\"\"", "5" ; "doubled quotes")]
#[test_case(",5", "" ; "nothing before separator")]
#[test_case("   ", "" ; "blank")]
fn test_clean_field(input: &str, expected: &str) {
    assert_eq!(clean_field(input), expected);
}

#[test_case("\"747211\" ")]
#[test_case(" 12 34,9 ")]
#[test_case("\" \"5\" \"")]
#[test_case("\"7.\"")]
fn test_clean_field_idempotent(input: &str) {
    let once = clean_field(input);
    assert_eq!(clean_field(&once), once);
}

// ============================================================================
// Row Tests
// ============================================================================

#[test]
fn test_normalize_row_line() {
    let outcome = normalize_row(&row(&["1", "747211", "1,0"]), 1, 2);
    assert_eq!(outcome, RowOutcome::Line("747211 - 1".to_string()));
    assert_eq!(outcome.line(), Some("747211 - 1"));
}

#[test]
fn test_normalize_row_reordered_columns() {
    let outcome = normalize_row(&row(&["3", "x", "55"]), 2, 0);
    assert_eq!(outcome, RowOutcome::Line("55 - 3".to_string()));
}

#[test]
fn test_normalize_row_missing_columns() {
    assert_eq!(
        normalize_row(&row(&["1", "747211"]), 1, 2),
        RowOutcome::Skipped(SkipReason::MissingColumns)
    );
    assert_eq!(
        normalize_row(&[], 0, 1),
        RowOutcome::Skipped(SkipReason::MissingColumns)
    );
}

#[test]
fn test_normalize_row_empty_fields() {
    assert_eq!(
        normalize_row(&row(&["1", " ", "4"]), 1, 2),
        RowOutcome::Skipped(SkipReason::EmptyIdentifier)
    );
    assert_eq!(
        normalize_row(&row(&["1", "747211", ""]), 1, 2),
        RowOutcome::Skipped(SkipReason::EmptyQuantity)
    );
    assert_eq!(normalize_row(&row(&["1", "747211", ""]), 1, 2).line(), None);
}

#[test]
fn test_normalize_rows_aggregates_skips() {
    let rows = vec![
        row(&["1", "747211", "1,0"]),
        row(&["2"]),
        row(&["3", "", "7"]),
        row(&["4", "100200", "12"]),
    ];

    let result = normalize_rows(&rows, 1, 2);
    assert_eq!(
        result.lines,
        vec!["747211 - 1".to_string(), "100200 - 12".to_string()]
    );
    assert_eq!(result.skipped, 2);
}

#[test]
fn test_normalize_rows_all_skipped() {
    let rows = vec![row(&["1"]), row(&["2", "x"])];
    let result = normalize_rows(&rows, 1, 2);
    assert!(result.lines.is_empty());
    assert_eq!(result.skipped, 2);
}
