//! Typed error type for the ingestion pipeline.

use thiserror::Error;

/// Errors raised while turning caller input into insert records.
///
/// Every variant fires before any write, so a failed ingestion never
/// leaves partial rows behind.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Malformed tabular input: a field that will not parse into the
    /// entity's column type, bad quoting, broken encoding.
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A row with the wrong number of columns for its entity.
    #[error("row {row}: expected {expected} columns, found {got}")]
    ColumnCount { row: u64, expected: usize, got: usize },

    /// A structured batch exceeded the per-call row cap.
    #[error("batch of {got} rows exceeds the {limit}-row limit")]
    TooManyRows { limit: usize, got: usize },
}
