//! Building energy metrics: EUI, per-degree intensity, and classification.

use std::fmt;

use thiserror::Error;

/// Error raised by the metric computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// A normalizing denominator was exactly zero.
    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),
    /// An argument was negative, non-finite, or otherwise out of band.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The comfort heat-balance iteration did not converge.
    #[error("comfort model did not converge within the iteration limit")]
    NonConvergence,
}

/// Computes Energy Use Intensity (EUI) in kWh/m².
///
/// # Arguments
///
/// * `energy_use` - Total energy consumed over the period (kWh, >= 0)
/// * `floor_area` - Conditioned floor area (m², > 0)
///
/// # Errors
///
/// Returns [`MetricError::DivisionByZero`] when `floor_area` is zero and
/// [`MetricError::InvalidInput`] when either argument is negative or
/// non-finite. Unit consistency is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use building_bench::metrics::compute_eui;
///
/// let eui = compute_eui(12000.0, 200.0);
/// assert_eq!(eui, Ok(60.0));
/// ```
pub fn compute_eui(energy_use: f64, floor_area: f64) -> Result<f64, MetricError> {
    if !energy_use.is_finite() || !floor_area.is_finite() {
        return Err(MetricError::InvalidInput(
            "energy_use and floor_area must be finite",
        ));
    }
    if energy_use < 0.0 {
        return Err(MetricError::InvalidInput("energy_use must be >= 0"));
    }
    if floor_area < 0.0 {
        return Err(MetricError::InvalidInput("floor_area must be > 0"));
    }
    if floor_area == 0.0 {
        return Err(MetricError::DivisionByZero("floor_area"));
    }
    Ok(energy_use / floor_area)
}

/// Energy consumed per degree of outdoor temperature (kWh/°C).
///
/// Recorded temperatures can legitimately be 0 °C, so the zero denominator
/// is an error the caller must handle, not a panic.
///
/// # Errors
///
/// Returns [`MetricError::DivisionByZero`] when `temperature_c` is zero and
/// [`MetricError::InvalidInput`] when either argument is non-finite.
pub fn energy_per_degree(energy_kwh: f64, temperature_c: f64) -> Result<f64, MetricError> {
    if !energy_kwh.is_finite() || !temperature_c.is_finite() {
        return Err(MetricError::InvalidInput(
            "energy_kwh and temperature_c must be finite",
        ));
    }
    if temperature_c == 0.0 {
        return Err(MetricError::DivisionByZero("temperature_c"));
    }
    Ok(energy_kwh / temperature_c)
}

/// Monthly consumption class relative to configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyClass {
    High,
    Medium,
    Low,
}

impl fmt::Display for EnergyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyClass::High => write!(f, "High"),
            EnergyClass::Medium => write!(f, "Medium"),
            EnergyClass::Low => write!(f, "Low"),
        }
    }
}

/// Classifies monthly consumption: above `high_kwh` is High, above
/// `medium_kwh` is Medium, anything else is Low. Both bounds are exclusive.
pub fn classify_energy_use(energy_kwh: f64, high_kwh: f64, medium_kwh: f64) -> EnergyClass {
    if energy_kwh > high_kwh {
        EnergyClass::High
    } else if energy_kwh > medium_kwh {
        EnergyClass::Medium
    } else {
        EnergyClass::Low
    }
}

/// Building size class relative to configured floor-area thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingSize {
    Large,
    Medium,
    Small,
}

impl fmt::Display for BuildingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildingSize::Large => write!(f, "Large"),
            BuildingSize::Medium => write!(f, "Medium"),
            BuildingSize::Small => write!(f, "Small"),
        }
    }
}

/// Classifies a building by conditioned floor area, exclusive bounds.
pub fn classify_building_size(floor_area_m2: f64, large_m2: f64, medium_m2: f64) -> BuildingSize {
    if floor_area_m2 > large_m2 {
        BuildingSize::Large
    } else if floor_area_m2 > medium_m2 {
        BuildingSize::Medium
    } else {
        BuildingSize::Small
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn eui_office_example() {
        let eui = compute_eui(12000.0, 200.0);
        assert_eq!(eui, Ok(60.0));
    }

    #[test]
    fn eui_second_example() {
        let eui = compute_eui(15000.0, 300.0);
        assert_eq!(eui, Ok(50.0));
    }

    #[test]
    fn eui_zero_consumption() {
        let eui = compute_eui(0.0, 100.0);
        assert_eq!(eui, Ok(0.0));
    }

    #[test]
    fn eui_zero_area_is_division_by_zero() {
        let err = compute_eui(100.0, 0.0);
        assert_eq!(err, Err(MetricError::DivisionByZero("floor_area")));
    }

    #[test]
    fn eui_negative_inputs_rejected() {
        assert!(matches!(
            compute_eui(-1.0, 100.0),
            Err(MetricError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_eui(100.0, -5.0),
            Err(MetricError::InvalidInput(_))
        ));
    }

    #[test]
    fn eui_non_finite_inputs_rejected() {
        assert!(matches!(
            compute_eui(f64::NAN, 100.0),
            Err(MetricError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_eui(100.0, f64::INFINITY),
            Err(MetricError::InvalidInput(_))
        ));
    }

    #[test]
    fn eui_matches_plain_quotient() {
        for (e, a) in [(320.0, 12.5), (1.0, 3.0), (9999.0, 7.0)] {
            let eui = compute_eui(e, a).unwrap();
            assert!((eui - e / a).abs() < EPS);
        }
    }

    #[test]
    fn eui_scale_invariance() {
        let base = compute_eui(12000.0, 200.0).unwrap();
        for k in [0.001, 0.5, 2.0, 1000.0] {
            let scaled = compute_eui(k * 12000.0, k * 200.0).unwrap();
            assert!(
                (scaled - base).abs() < EPS,
                "scaling by {k} changed the intensity: {scaled} vs {base}"
            );
        }
    }

    #[test]
    fn per_degree_basic() {
        let v = energy_per_degree(320.0, 2.0).unwrap();
        assert!((v - 160.0).abs() < EPS);
    }

    #[test]
    fn per_degree_zero_temperature() {
        let err = energy_per_degree(320.0, 0.0);
        assert_eq!(err, Err(MetricError::DivisionByZero("temperature_c")));
    }

    #[test]
    fn energy_classes_cover_thresholds() {
        assert_eq!(classify_energy_use(330.0, 300.0, 200.0), EnergyClass::High);
        assert_eq!(
            classify_energy_use(300.0, 300.0, 200.0),
            EnergyClass::Medium
        );
        assert_eq!(
            classify_energy_use(250.0, 300.0, 200.0),
            EnergyClass::Medium
        );
        assert_eq!(classify_energy_use(200.0, 300.0, 200.0), EnergyClass::Low);
        assert_eq!(classify_energy_use(170.0, 300.0, 200.0), EnergyClass::Low);
    }

    #[test]
    fn building_sizes_cover_thresholds() {
        assert_eq!(
            classify_building_size(1000.0, 500.0, 100.0),
            BuildingSize::Large
        );
        assert_eq!(
            classify_building_size(500.0, 500.0, 100.0),
            BuildingSize::Medium
        );
        assert_eq!(
            classify_building_size(80.0, 500.0, 100.0),
            BuildingSize::Small
        );
    }
}
