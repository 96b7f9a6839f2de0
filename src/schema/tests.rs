//! Structure detection tests

use super::*;
use crate::error::Error;

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

// ============================================================================
// Row Parsing Tests
// ============================================================================

#[test]
fn test_parse_rows_semicolon_with_quotes() {
    let rows = parse_rows("LP;Indeks katalogowy;Zamówiono\n1;747211;\"1,0\"", ';');
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], cells(&["1", "747211", "1,0"]));
}

#[test]
fn test_parse_rows_flexible_lengths() {
    let rows = parse_rows("a,b,c\n1\n1,2,3,4", ',');
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].len(), 1);
    assert_eq!(rows[2].len(), 4);
}

#[test]
fn test_parse_rows_skips_blank_lines() {
    let rows = parse_rows("a,b,c\r\n\r\n1,2,3\r\n", ',');
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_parse_rows_non_ascii_delimiter() {
    assert!(parse_rows("a§b", '§').is_empty());
}

#[test]
fn test_normalize_header_cell() {
    assert_eq!(normalize_header_cell("  \"Indeks katalogowy\" "), "Indeks katalogowy");
    assert_eq!(normalize_header_cell("LP"), "LP");
}

#[test]
fn test_fold_diacritics() {
    assert_eq!(fold_diacritics("Zamówiono"), "Zamowiono");
    assert_eq!(fold_diacritics("Zamowiono"), "Zamowiono");
}

// ============================================================================
// Column Selection Tests
// ============================================================================

#[test]
fn test_select_by_header_names_any_position() {
    let detector = StructureDetector::new();
    let header = cells(&["Zamówiono", "Nazwa", "Cena", "Indeks katalogowy"]);

    let selection = detector.select_columns(&header).unwrap();
    assert_eq!(selection.index_column, 3);
    assert_eq!(selection.quantity_column, 0);
    assert_eq!(selection.strategy, ColumnStrategy::HeaderNames);
}

#[test]
fn test_select_first_quantity_match() {
    let detector = StructureDetector::new();
    let header = cells(&["Indeks katalogowy", "Zamowiono", "Zamowiono netto"]);

    let selection = detector.select_columns(&header).unwrap();
    assert_eq!(selection.index_column, 0);
    assert_eq!(selection.quantity_column, 1);
}

#[test]
fn test_select_requires_exact_index_header() {
    let detector = StructureDetector::new();
    let header = cells(&["Indeks", "Zamowiono"]);
    assert!(detector.select_columns(&header).is_none());
}

#[test]
fn test_select_positional_fallback() {
    let detector = StructureDetector::new();
    let header = cells(&["A", "B", "C", "D"]);

    let selection = detector.select_columns(&header).unwrap();
    assert_eq!(selection.index_column, 1);
    assert_eq!(selection.quantity_column, 2);
    assert_eq!(selection.strategy, ColumnStrategy::Positional);
}

#[test]
fn test_select_too_narrow_header() {
    let detector = StructureDetector::new();
    assert!(detector.select_columns(&cells(&["A", "B"])).is_none());
}

#[test]
fn test_select_custom_rules() {
    let detector = StructureDetector::new().with_rules(HeaderRules {
        index_header: "SKU".to_string(),
        quantity_fragment: "Qty".to_string(),
    });
    let selection = detector.select_columns(&cells(&["Qty ordered", "SKU"])).unwrap();
    assert_eq!(selection.index_column, 1);
    assert_eq!(selection.quantity_column, 0);
}

// ============================================================================
// Detection Tests
// ============================================================================

#[test]
fn test_detect_semicolon_named_header() {
    let detector = StructureDetector::new();
    let structure = detector
        .detect("LP;Indeks katalogowy;Zamówiono\n1;747211;\"1,0\"")
        .unwrap();

    assert_eq!(structure.delimiter, ';');
    assert_eq!(structure.index_column, 1);
    assert_eq!(structure.quantity_column, 2);
    assert_eq!(structure.strategy, ColumnStrategy::HeaderNames);
    assert_eq!(structure.data_rows, vec![cells(&["1", "747211", "1,0"])]);
}

#[test]
fn test_detect_comma_positional() {
    let detector = StructureDetector::new();
    let structure = detector.detect("A,B,C,D\nx,9001,5,extra").unwrap();

    assert_eq!(structure.delimiter, ',');
    assert_eq!(structure.index_column, 1);
    assert_eq!(structure.quantity_column, 2);
    assert_eq!(structure.strategy, ColumnStrategy::Positional);
    assert_eq!(structure.required_width(), 3);
}

#[test]
fn test_detect_keeps_short_rows() {
    let detector = StructureDetector::new();
    let structure = detector.detect("A;B;C\n1\n2;x;3").unwrap();
    assert_eq!(structure.data_rows.len(), 2);
    assert_eq!(structure.data_rows[0], cells(&["1"]));
}

#[test]
fn test_detect_header_only_is_invalid() {
    let detector = StructureDetector::new();
    let result = detector.detect("LP;Indeks katalogowy;Zamówiono\n");
    assert!(matches!(result, Err(Error::InvalidFormat { .. })));
}

#[test]
fn test_detect_single_column_is_invalid() {
    let detector = StructureDetector::new();
    let result = detector.detect("only\none\ncolumn");
    assert!(matches!(result, Err(Error::InvalidFormat { .. })));
}

#[test]
fn test_detect_custom_delimiters() {
    let detector = StructureDetector::new().with_delimiters(vec!['\t']);
    let structure = detector.detect("LP\tKod\tIlosc\n1\tAB-1\t4").unwrap();
    assert_eq!(structure.delimiter, '\t');
}
