//! Shared test fixtures for integration tests.

use building_bench::config::{AnalysisConfig, ThresholdsConfig};
use building_bench::dataset::sample_year;
use building_bench::dataset::types::{MonthlyRecord, RawMonthlyRecord};

/// Default analysis configuration (baseline office, 1000 m²).
pub fn default_config() -> AnalysisConfig {
    AnalysisConfig::baseline()
}

/// Default classification thresholds (high 300, medium 200 kWh).
pub fn default_thresholds() -> ThresholdsConfig {
    ThresholdsConfig::default()
}

/// The built-in twelve-month sample year.
pub fn sample_records() -> Vec<MonthlyRecord> {
    sample_year()
}

/// A raw ingest batch with two incomplete rows (Feb energy, Mar temperature).
pub fn raw_records_with_gaps() -> Vec<RawMonthlyRecord> {
    vec![
        RawMonthlyRecord::new("Jan", Some(320.0), Some(2.0)),
        RawMonthlyRecord::new("Feb", None, Some(4.0)),
        RawMonthlyRecord::new("Mar", Some(300.0), None),
        RawMonthlyRecord::new("Apr", Some(250.0), Some(12.0)),
    ]
}
