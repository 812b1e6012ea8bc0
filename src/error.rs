use std::io;
use thiserror::Error;

/// Errors reported by the record stores and their file persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's hard record limit was reached; nothing was added.
    #[error("store is full ({limit} records)")]
    CapacityExceeded { limit: usize },
    #[error("duplicate {0}")]
    DuplicateKey(String),
    #[error("no record with {0}")]
    NotFound(String),
    #[error("arrival time cannot be earlier than departure time")]
    InvalidTimeOrder,
    #[error("file error: {0}")]
    Io(#[from] io::Error),
    /// The count line at the top of a data file could not be parsed.
    /// The store is left untouched when this happens.
    #[error("corrupted data file: {0}")]
    Corrupted(String),
}
