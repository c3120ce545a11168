//! CSV ingest of monthly records.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::DataError;
use crate::dataset::types::RawMonthlyRecord;

/// Reads `month,energy_kwh,temperature_c` rows from a CSV file.
///
/// Empty numeric cells become `None` on the raw row; callers decide whether
/// to drop or fill them.
///
/// # Errors
///
/// Returns a [`DataError`] if the file cannot be opened or a row fails to
/// parse.
pub fn read_csv_records(path: &Path) -> Result<Vec<RawMonthlyRecord>, DataError> {
    let file = File::open(path)?;
    read_csv(io::BufReader::new(file))
}

/// Reads monthly rows from any reader.
///
/// # Errors
///
/// Returns a [`DataError`] if a row fails to parse.
pub fn read_csv(reader: impl Read) -> Result<Vec<RawMonthlyRecord>, DataError> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: RawMonthlyRecord = record?;
        rows.push(row);
    }
    Ok(rows)
}
