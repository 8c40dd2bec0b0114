// src/error.rs

use thiserror::Error;

/// Errors raised while loading the sample table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Missing/unreadable file or malformed record.
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("column '{0}' not found in CSV header")]
    MissingColumn(String),

    #[error("line {line}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
}

/// A row mask applied to a table it was not built for.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("row mask has {mask_len} entries but the table has {rows} rows")]
pub struct MaskLengthError {
    pub mask_len: usize,
    pub rows: usize,
}
