//! Structure detection types

use crate::types::Row;
use serde::{Deserialize, Serialize};

/// Header names the name-based strategy looks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRules {
    /// Exact header of the identifier column
    pub index_header: String,
    /// Substring identifying the quantity column
    pub quantity_fragment: String,
}

impl Default for HeaderRules {
    fn default() -> Self {
        Self {
            index_header: "Indeks katalogowy".to_string(),
            quantity_fragment: "Zamow".to_string(),
        }
    }
}

/// How the identifier and quantity columns were chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStrategy {
    /// Matched by header names
    HeaderNames,
    /// Assumed columns 1 and 2 (column 0 is a line number)
    Positional,
}

impl ColumnStrategy {
    /// Strategies in evaluation order
    pub const ORDER: [ColumnStrategy; 2] = [ColumnStrategy::HeaderNames, ColumnStrategy::Positional];
}

/// Column positions picked from a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelection {
    /// Identifier column index
    pub index_column: usize,
    /// Quantity column index
    pub quantity_column: usize,
    /// Strategy that produced the selection
    pub strategy: ColumnStrategy,
}

/// Detected layout of an order table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStructure {
    /// Field delimiter
    pub delimiter: char,
    /// Identifier column index
    pub index_column: usize,
    /// Quantity column index
    pub quantity_column: usize,
    /// Strategy that chose the columns
    pub strategy: ColumnStrategy,
    /// Rows after the header, short rows included
    pub data_rows: Vec<Row>,
}

impl TableStructure {
    /// Minimum number of cells a row needs to yield both fields
    pub fn required_width(&self) -> usize {
        self.index_column.max(self.quantity_column) + 1
    }
}
