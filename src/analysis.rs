//! Post-hoc annual report computed from the complete monthly record set.

use std::fmt;

use crate::config::ThresholdsConfig;
use crate::dataset::types::MonthlyRecord;
use crate::metrics::{
    BuildingSize, EnergyClass, MetricError, classify_building_size, classify_energy_use,
    compute_eui, energy_per_degree,
};

/// Aggregate benchmarking figures derived from a full year of records.
///
/// Computed post-hoc from the record vector so the printed report and any
/// exported rows always agree on the same data.
#[derive(Debug, Clone)]
pub struct AnnualReport {
    /// Number of months covered.
    pub months: usize,
    /// Total consumption (kWh).
    pub total_energy_kwh: f64,
    /// Mean monthly consumption (kWh).
    pub mean_energy_kwh: f64,
    /// Highest monthly consumption (kWh).
    pub peak_energy_kwh: f64,
    /// Month with the highest consumption.
    pub peak_month: String,
    /// Lowest monthly consumption (kWh).
    pub min_energy_kwh: f64,
    /// Month with the lowest consumption.
    pub min_month: String,
    /// Energy Use Intensity over the period (kWh/m²).
    pub eui_kwh_m2: f64,
    /// Size class of the building under analysis.
    pub building_size: BuildingSize,
    /// Months classified High, in input order.
    pub high_months: Vec<String>,
    /// Month count per consumption class: (high, medium, low).
    pub class_counts: (usize, usize, usize),
    /// Months warmer than the configured warm-season threshold.
    pub warm_month_count: usize,
    /// Mean consumption per degree over months with temperature above 0 °C
    /// (kWh/°C); zero when no month qualifies.
    pub mean_energy_per_degree: f64,
}

impl AnnualReport {
    /// Computes the report from the complete record vector.
    ///
    /// Empty input yields an all-zero report with an EUI of 0.
    ///
    /// # Errors
    ///
    /// Returns a [`MetricError`] if `floor_area_m2` is zero, negative, or
    /// non-finite.
    pub fn from_records(
        records: &[MonthlyRecord],
        floor_area_m2: f64,
        thresholds: &ThresholdsConfig,
    ) -> Result<Self, MetricError> {
        let total_energy_kwh: f64 = records.iter().map(|r| r.energy_kwh).sum();
        let eui_kwh_m2 = compute_eui(total_energy_kwh, floor_area_m2)?;
        let building_size = classify_building_size(
            floor_area_m2,
            thresholds.size_large_m2,
            thresholds.size_medium_m2,
        );

        if records.is_empty() {
            return Ok(Self {
                months: 0,
                total_energy_kwh: 0.0,
                mean_energy_kwh: 0.0,
                peak_energy_kwh: 0.0,
                peak_month: String::new(),
                min_energy_kwh: 0.0,
                min_month: String::new(),
                eui_kwh_m2,
                building_size,
                high_months: Vec::new(),
                class_counts: (0, 0, 0),
                warm_month_count: 0,
                mean_energy_per_degree: 0.0,
            });
        }

        let mut peak = &records[0];
        let mut min = &records[0];
        let mut high_months = Vec::new();
        let mut class_counts = (0, 0, 0);
        let mut warm_month_count = 0;
        let mut per_degree_sum = 0.0;
        let mut per_degree_n = 0usize;

        for r in records {
            if r.energy_kwh > peak.energy_kwh {
                peak = r;
            }
            if r.energy_kwh < min.energy_kwh {
                min = r;
            }
            match classify_energy_use(
                r.energy_kwh,
                thresholds.energy_high_kwh,
                thresholds.energy_medium_kwh,
            ) {
                EnergyClass::High => {
                    class_counts.0 += 1;
                    high_months.push(r.month.clone());
                }
                EnergyClass::Medium => class_counts.1 += 1,
                EnergyClass::Low => class_counts.2 += 1,
            }
            if r.temperature_c > thresholds.warm_month_min_c {
                warm_month_count += 1;
            }
            if r.temperature_c > 0.0 {
                if let Ok(v) = energy_per_degree(r.energy_kwh, r.temperature_c) {
                    per_degree_sum += v;
                    per_degree_n += 1;
                }
            }
        }

        let mean_energy_per_degree = if per_degree_n > 0 {
            per_degree_sum / per_degree_n as f64
        } else {
            0.0
        };

        Ok(Self {
            months: records.len(),
            total_energy_kwh,
            mean_energy_kwh: total_energy_kwh / records.len() as f64,
            peak_energy_kwh: peak.energy_kwh,
            peak_month: peak.month.clone(),
            min_energy_kwh: min.energy_kwh,
            min_month: min.month.clone(),
            eui_kwh_m2,
            building_size,
            high_months,
            class_counts,
            warm_month_count,
            mean_energy_per_degree,
        })
    }
}

impl fmt::Display for AnnualReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Annual Report ---")?;
        writeln!(f, "Months covered:        {}", self.months)?;
        writeln!(f, "Total energy:          {:.1} kWh", self.total_energy_kwh)?;
        writeln!(f, "Mean monthly energy:   {:.1} kWh", self.mean_energy_kwh)?;
        writeln!(
            f,
            "Peak month:            {} ({:.1} kWh)",
            self.peak_month, self.peak_energy_kwh
        )?;
        writeln!(
            f,
            "Lowest month:          {} ({:.1} kWh)",
            self.min_month, self.min_energy_kwh
        )?;
        writeln!(
            f,
            "EUI:                   {:.2} kWh/m² ({} building)",
            self.eui_kwh_m2, self.building_size
        )?;
        writeln!(
            f,
            "Class counts:          high={} medium={} low={}",
            self.class_counts.0, self.class_counts.1, self.class_counts.2
        )?;
        writeln!(
            f,
            "High-usage months:     {}",
            if self.high_months.is_empty() {
                "none".to_string()
            } else {
                self.high_months.join(", ")
            }
        )?;
        writeln!(f, "Warm months:           {}", self.warm_month_count)?;
        write!(
            f,
            "Mean energy/degree:    {:.2} kWh/°C",
            self.mean_energy_per_degree
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample::sample_year;

    fn thresholds() -> ThresholdsConfig {
        ThresholdsConfig::default()
    }

    #[test]
    fn sample_year_report() {
        let report = AnnualReport::from_records(&sample_year(), 1000.0, &thresholds()).unwrap();
        assert_eq!(report.months, 12);
        assert!((report.total_energy_kwh - 3000.0).abs() < 1e-9);
        assert!((report.mean_energy_kwh - 250.0).abs() < 1e-9);
        assert_eq!(report.peak_month, "Dec");
        assert_eq!(report.peak_energy_kwh, 330.0);
        assert_eq!(report.min_month, "Jul");
        assert_eq!(report.min_energy_kwh, 170.0);
        assert!((report.eui_kwh_m2 - 3.0).abs() < 1e-9);
        assert_eq!(report.building_size, BuildingSize::Large);
    }

    #[test]
    fn high_usage_months_in_input_order() {
        let report = AnnualReport::from_records(&sample_year(), 1000.0, &thresholds()).unwrap();
        assert_eq!(report.high_months, vec!["Jan", "Dec"]);
    }

    #[test]
    fn class_counts_cover_all_months() {
        let report = AnnualReport::from_records(&sample_year(), 1000.0, &thresholds()).unwrap();
        assert_eq!(report.class_counts, (2, 6, 4));
        let (h, m, l) = report.class_counts;
        assert_eq!(h + m + l, report.months);
    }

    #[test]
    fn warm_month_count_matches_summer_filter() {
        let report = AnnualReport::from_records(&sample_year(), 1000.0, &thresholds()).unwrap();
        assert_eq!(report.warm_month_count, 3);
    }

    #[test]
    fn per_degree_mean_is_positive_and_finite() {
        let report = AnnualReport::from_records(&sample_year(), 1000.0, &thresholds()).unwrap();
        assert!(report.mean_energy_per_degree > 0.0);
        assert!(report.mean_energy_per_degree.is_finite());
    }

    #[test]
    fn sub_zero_months_are_excluded_from_per_degree_mean() {
        let records = vec![
            MonthlyRecord::new("Jan", 300.0, -5.0),
            MonthlyRecord::new("Feb", 200.0, 10.0),
        ];
        let report = AnnualReport::from_records(&records, 1000.0, &thresholds()).unwrap();
        // Feb only: 200 / 10
        assert!((report.mean_energy_per_degree - 20.0).abs() < 1e-9);
    }

    #[test]
    fn all_sub_zero_months_give_zero_per_degree_mean() {
        let records = vec![
            MonthlyRecord::new("Jan", 300.0, -5.0),
            MonthlyRecord::new("Feb", 280.0, -2.0),
        ];
        let report = AnnualReport::from_records(&records, 1000.0, &thresholds()).unwrap();
        assert_eq!(report.mean_energy_per_degree, 0.0);
    }

    #[test]
    fn empty_records_degrade_to_zeros() {
        let report = AnnualReport::from_records(&[], 1000.0, &thresholds()).unwrap();
        assert_eq!(report.months, 0);
        assert_eq!(report.total_energy_kwh, 0.0);
        assert_eq!(report.eui_kwh_m2, 0.0);
        assert!(report.high_months.is_empty());
    }

    #[test]
    fn zero_floor_area_propagates_division_error() {
        let err = AnnualReport::from_records(&sample_year(), 0.0, &thresholds());
        assert!(matches!(err, Err(MetricError::DivisionByZero(_))));
    }

    #[test]
    fn display_mentions_key_figures() {
        let report = AnnualReport::from_records(&sample_year(), 1000.0, &thresholds()).unwrap();
        let s = format!("{report}");
        assert!(s.contains("Annual Report"));
        assert!(s.contains("3000.0 kWh"));
        assert!(s.contains("Dec"));
    }
}
