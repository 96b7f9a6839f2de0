//! Table structure detection module
//!
//! Infers the delimiter and the identifier/quantity column positions of an
//! uploaded order table.
//!
//! # Detection order
//!
//! - **Delimiters**: `;` then `,` (configurable), first usable one wins
//! - **Header names**: `Indeks katalogowy` plus any column containing `Zamow`
//! - **Positional**: columns 1 and 2 when the header has at least 3 cells
//!
//! An attempt is usable only if it has a header and at least one data row.

mod detector;
mod types;

pub use detector::{fold_diacritics, normalize_header_cell, parse_rows, StructureDetector};
pub use types::{ColumnSelection, ColumnStrategy, HeaderRules, TableStructure};

#[cfg(test)]
mod tests;
