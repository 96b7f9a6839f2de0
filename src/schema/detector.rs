//! Structure detector implementation

use super::types::{ColumnSelection, ColumnStrategy, HeaderRules, TableStructure};
use crate::error::{Error, Result};
use crate::types::Row;
use csv::{ReaderBuilder, Trim};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Minimum rows (header + one data row) for a usable parse
const MIN_ROWS: usize = 2;

/// Minimum header width for the positional fallback
const POSITIONAL_MIN_CELLS: usize = 3;

/// Detects delimiter and column roles of an order table
#[derive(Debug, Clone)]
pub struct StructureDetector {
    /// Candidate delimiters in priority order
    delimiters: Vec<char>,
    /// Header names for the name-based strategy
    rules: HeaderRules,
}

impl Default for StructureDetector {
    fn default() -> Self {
        Self {
            delimiters: vec![';', ','],
            rules: HeaderRules::default(),
        }
    }
}

impl StructureDetector {
    /// Create a detector with default delimiters and header names
    pub fn new() -> Self {
        Self::default()
    }

    /// Set candidate delimiters
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: impl Into<Vec<char>>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Set header rules
    #[must_use]
    pub fn with_rules(mut self, rules: HeaderRules) -> Self {
        self.rules = rules;
        self
    }

    /// Detect the table structure of decoded text
    pub fn detect(&self, text: &str) -> Result<TableStructure> {
        for &delimiter in &self.delimiters {
            let mut rows = parse_rows(text, delimiter);
            if rows.len() < MIN_ROWS {
                tracing::debug!(
                    delimiter = %delimiter.escape_default(),
                    rows = rows.len(),
                    "Too few rows for delimiter"
                );
                continue;
            }

            let Some(selection) = self.select_columns(&rows[0]) else {
                tracing::debug!(
                    delimiter = %delimiter.escape_default(),
                    header_cells = rows[0].len(),
                    "No column strategy matched header"
                );
                continue;
            };

            let data_rows = rows.split_off(1);
            tracing::debug!(
                delimiter = %delimiter.escape_default(),
                index_column = selection.index_column,
                quantity_column = selection.quantity_column,
                strategy = ?selection.strategy,
                data_rows = data_rows.len(),
                "Detected table structure"
            );

            return Ok(TableStructure {
                delimiter,
                index_column: selection.index_column,
                quantity_column: selection.quantity_column,
                strategy: selection.strategy,
                data_rows,
            });
        }

        Err(Error::invalid_format(format!(
            "no usable header with delimiters {:?}",
            self.delimiters
        )))
    }

    /// Pick columns from a header row, first matching strategy wins
    pub fn select_columns(&self, header: &[String]) -> Option<ColumnSelection> {
        ColumnStrategy::ORDER
            .iter()
            .find_map(|&strategy| self.apply_strategy(strategy, header))
    }

    fn apply_strategy(&self, strategy: ColumnStrategy, header: &[String]) -> Option<ColumnSelection> {
        match strategy {
            ColumnStrategy::HeaderNames => {
                let cells: Vec<&str> = header.iter().map(|c| normalize_header_cell(c)).collect();
                let fragment = fold_diacritics(&self.rules.quantity_fragment);

                let index_column = cells.iter().position(|c| *c == self.rules.index_header)?;
                let quantity_column = cells
                    .iter()
                    .position(|c| fold_diacritics(c).contains(&fragment))?;

                Some(ColumnSelection {
                    index_column,
                    quantity_column,
                    strategy,
                })
            }
            ColumnStrategy::Positional => {
                (header.len() >= POSITIONAL_MIN_CELLS).then_some(ColumnSelection {
                    index_column: 1,
                    quantity_column: 2,
                    strategy,
                })
            }
        }
    }
}

/// Parse delimited text into rows of cells.
///
/// Rows may differ in length. Blank lines are skipped, and so is any record
/// the reader cannot parse. Non-ASCII delimiters yield no rows.
pub fn parse_rows(text: &str, delimiter: char) -> Vec<Row> {
    if !delimiter.is_ascii() {
        tracing::warn!(delimiter = %delimiter, "Ignoring non-ASCII delimiter");
        return Vec::new();
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) => tracing::debug!(line = line + 1, error = %e, "Skipping unreadable record"),
        }
    }
    rows
}

/// Trim whitespace and surrounding quotes from a header cell
pub fn normalize_header_cell(cell: &str) -> &str {
    cell.trim().trim_matches('"').trim()
}

/// Strip combining accents so `Zamówiono` matches `Zamow`
pub fn fold_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
