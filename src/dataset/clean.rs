//! Missing-value handling for ingested rows.

use super::types::{MonthlyRecord, RawMonthlyRecord};

/// Keeps only rows with both numeric cells present.
pub fn drop_missing(rows: &[RawMonthlyRecord]) -> Vec<MonthlyRecord> {
    rows.iter()
        .filter_map(|r| match (r.energy_kwh, r.temperature_c) {
            (Some(e), Some(t)) => Some(MonthlyRecord::new(&r.month, e, t)),
            _ => None,
        })
        .collect()
}

/// Replaces missing cells with the given fill values, keeping every row.
pub fn fill_missing(
    rows: &[RawMonthlyRecord],
    energy_fill_kwh: f64,
    temperature_fill_c: f64,
) -> Vec<MonthlyRecord> {
    rows.iter()
        .map(|r| {
            MonthlyRecord::new(
                &r.month,
                r.energy_kwh.unwrap_or(energy_fill_kwh),
                r.temperature_c.unwrap_or(temperature_fill_c),
            )
        })
        .collect()
}
