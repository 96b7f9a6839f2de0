//! Field cleaning and per-row normalization

use crate::types::{NormalizedLine, Row};

/// Why a row produced no line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Row has too few cells for one of the target columns
    MissingColumns,
    /// Identifier was empty after cleaning
    EmptyIdentifier,
    /// Quantity was empty after cleaning
    EmptyQuantity,
}

/// Result of normalizing a single row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row produced an order line
    Line(NormalizedLine),
    /// Row was dropped
    Skipped(SkipReason),
}

impl RowOutcome {
    /// Get the line, if any
    pub fn line(&self) -> Option<&str> {
        match self {
            RowOutcome::Line(line) => Some(line),
            RowOutcome::Skipped(_) => None,
        }
    }
}

/// Lines produced from a table plus how many rows were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRows {
    /// Order lines in input order
    pub lines: Vec<NormalizedLine>,
    /// Number of skipped rows
    pub skipped: usize,
}

/// Clean a cell value down to its integer token.
///
/// Trims, strips surrounding double quotes, turns `,` into `.`, removes all
/// whitespace, then keeps only what precedes the first `.`.
/// Fractional quantities are truncated, not rounded.
///
/// The output never starts or ends with a quote, so cleaning is idempotent.
pub fn clean_field(value: &str) -> String {
    let unquoted = value.trim().trim_matches('"');

    let compact: String = unquoted
        .replace(',', ".")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let integer = compact.split('.').next().unwrap_or_default();
    integer.trim_matches('"').to_string()
}

/// Normalize one data row into an order line
pub fn normalize_row(row: &[String], index_column: usize, quantity_column: usize) -> RowOutcome {
    let (Some(index), Some(quantity)) = (row.get(index_column), row.get(quantity_column)) else {
        return RowOutcome::Skipped(SkipReason::MissingColumns);
    };

    let index = clean_field(index);
    if index.is_empty() {
        return RowOutcome::Skipped(SkipReason::EmptyIdentifier);
    }

    let quantity = clean_field(quantity);
    if quantity.is_empty() {
        return RowOutcome::Skipped(SkipReason::EmptyQuantity);
    }

    RowOutcome::Line(format!("{index} - {quantity}"))
}

/// Normalize every data row, collecting lines and counting skips
pub fn normalize_rows(rows: &[Row], index_column: usize, quantity_column: usize) -> NormalizedRows {
    let mut result = NormalizedRows::default();

    for (i, row) in rows.iter().enumerate() {
        match normalize_row(row, index_column, quantity_column) {
            RowOutcome::Line(line) => result.lines.push(line),
            RowOutcome::Skipped(reason) => {
                tracing::debug!(row = i + 1, ?reason, "Skipping row");
                result.skipped += 1;
            }
        }
    }

    result
}
