//! Row normalization module
//!
//! Turns data rows into `"<identifier> - <quantity>"` order lines.
//! Rows that cannot yield both fields are skipped, never reported as errors.

mod normalizer;

pub use normalizer::{clean_field, normalize_row, normalize_rows, NormalizedRows, RowOutcome, SkipReason};

#[cfg(test)]
mod tests;
