//! CSV import and export for the monthly table.

pub mod export;
pub mod import;

use thiserror::Error;

/// Error raised while reading or writing table files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
