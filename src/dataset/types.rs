//! Record types for the monthly energy table.

use std::fmt;

use serde::Deserialize;

/// One month of metered consumption and mean outdoor temperature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyRecord {
    /// Month label (e.g., "Jan").
    pub month: String,
    /// Metered consumption for the month (kWh).
    pub energy_kwh: f64,
    /// Mean outdoor temperature for the month (°C).
    pub temperature_c: f64,
}

impl MonthlyRecord {
    /// Creates a record from a month label and its two readings.
    pub fn new(month: &str, energy_kwh: f64, temperature_c: f64) -> Self {
        Self {
            month: month.to_string(),
            energy_kwh,
            temperature_c,
        }
    }
}

impl fmt::Display for MonthlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} | energy={:>6.1} kWh  temp={:>5.1} °C",
            self.month, self.energy_kwh, self.temperature_c
        )
    }
}

/// A monthly row as ingested, before missing values are resolved.
///
/// Numeric cells may be empty in source files; cleaning converts raw rows
/// into [`MonthlyRecord`]s by dropping or filling the gaps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMonthlyRecord {
    /// Month label (e.g., "Jan").
    pub month: String,
    /// Metered consumption if present (kWh).
    pub energy_kwh: Option<f64>,
    /// Mean outdoor temperature if present (°C).
    pub temperature_c: Option<f64>,
}

impl RawMonthlyRecord {
    /// Creates a raw row, with `None` standing in for empty cells.
    pub fn new(month: &str, energy_kwh: Option<f64>, temperature_c: Option<f64>) -> Self {
        Self {
            month: month.to_string(),
            energy_kwh,
            temperature_c,
        }
    }

    /// Whether both numeric cells are present.
    pub fn is_complete(&self) -> bool {
        self.energy_kwh.is_some() && self.temperature_c.is_some()
    }
}
