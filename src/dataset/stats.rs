//! Summary statistics over the numeric columns of the monthly table.

use std::fmt;

use super::types::MonthlyRecord;

/// Five-number summary of one numeric column.
///
/// Empty input degrades to all-zero fields rather than erroring, matching
/// the report path where an empty table is a valid (if dull) run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator; 0 when n < 2).
    pub std: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl SeriesSummary {
    /// Computes the summary for one column of values.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                std: 0.0,
                min: 0.0,
                max: 0.0,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = if values.len() < 2 {
            0.0
        } else {
            let sq_sum: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            (sq_sum / (n - 1.0)).sqrt()
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count: values.len(),
            mean,
            std,
            min,
            max,
        }
    }
}

/// Summaries for both numeric columns of the monthly table.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    /// Consumption column (kWh).
    pub energy: SeriesSummary,
    /// Temperature column (°C).
    pub temperature: SeriesSummary,
}

/// Describes the monthly table column by column.
pub fn describe(records: &[MonthlyRecord]) -> DatasetSummary {
    let energy: Vec<f64> = records.iter().map(|r| r.energy_kwh).collect();
    let temperature: Vec<f64> = records.iter().map(|r| r.temperature_c).collect();
    DatasetSummary {
        energy: SeriesSummary::from_values(&energy),
        temperature: SeriesSummary::from_values(&temperature),
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Dataset Summary ---")?;
        writeln!(
            f,
            "energy_kwh:     n={:<3} mean={:>7.1}  std={:>6.1}  min={:>7.1}  max={:>7.1}",
            self.energy.count, self.energy.mean, self.energy.std, self.energy.min, self.energy.max
        )?;
        write!(
            f,
            "temperature_c:  n={:<3} mean={:>7.1}  std={:>6.1}  min={:>7.1}  max={:>7.1}",
            self.temperature.count,
            self.temperature.mean,
            self.temperature.std,
            self.temperature.min,
            self.temperature.max
        )
    }
}
