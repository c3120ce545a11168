//! CSV export of the analyzed monthly table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::DataError;
use crate::config::ThresholdsConfig;
use crate::dataset::types::MonthlyRecord;
use crate::metrics::{classify_energy_use, energy_per_degree};

/// Schema v1 column header for the analyzed table export.
const HEADER: &str = "month,energy_kwh,temperature_c,energy_per_degree,energy_class";

/// Exports analyzed monthly rows to a CSV file at the given path.
///
/// Writes a header row followed by one row per record with the derived
/// per-degree intensity and consumption class appended. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns a [`DataError`] if file creation or writing fails.
pub fn export_csv(
    records: &[MonthlyRecord],
    thresholds: &ThresholdsConfig,
    path: &Path,
) -> Result<(), DataError> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, thresholds, buf)
}

/// Writes analyzed monthly rows as CSV to any writer.
///
/// A zero-degree month has no defined per-degree intensity; its cell is
/// left empty rather than guessed.
///
/// # Errors
///
/// Returns a [`DataError`] if writing fails.
pub fn write_csv(
    records: &[MonthlyRecord],
    thresholds: &ThresholdsConfig,
    writer: impl Write,
) -> Result<(), DataError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for r in records {
        let per_degree = match energy_per_degree(r.energy_kwh, r.temperature_c) {
            Ok(v) => format!("{v:.4}"),
            Err(_) => String::new(),
        };
        let class = classify_energy_use(
            r.energy_kwh,
            thresholds.energy_high_kwh,
            thresholds.energy_medium_kwh,
        );
        wtr.write_record(&[
            r.month.clone(),
            format!("{:.1}", r.energy_kwh),
            format!("{:.1}", r.temperature_c),
            per_degree,
            class.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
