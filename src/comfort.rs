//! PMV/PPD thermal comfort indices (ISO 7730 heat-balance model).

use std::fmt;

use crate::metrics::MetricError;

/// Iteration cap for the clothing surface temperature solve.
const MAX_ITERATIONS: usize = 150;

/// Convergence tolerance on the scaled surface temperature.
const EPS: f64 = 0.00015;

/// Environmental and personal inputs to the comfort model.
#[derive(Debug, Clone, PartialEq)]
pub struct ComfortInput {
    /// Dry-bulb air temperature (°C).
    pub air_temp_c: f64,
    /// Mean radiant temperature (°C).
    pub mean_radiant_temp_c: f64,
    /// Relative air velocity (m/s, >= 0).
    pub air_velocity_m_s: f64,
    /// Relative humidity (%, 0–100).
    pub relative_humidity_pct: f64,
    /// Metabolic rate (met, > 0).
    pub metabolic_rate_met: f64,
    /// Clothing insulation (clo, >= 0).
    pub clothing_clo: f64,
}

impl ComfortInput {
    fn validate(&self) -> Result<(), MetricError> {
        let fields = [
            self.air_temp_c,
            self.mean_radiant_temp_c,
            self.air_velocity_m_s,
            self.relative_humidity_pct,
            self.metabolic_rate_met,
            self.clothing_clo,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(MetricError::InvalidInput(
                "comfort inputs must be finite",
            ));
        }
        if self.air_velocity_m_s < 0.0 {
            return Err(MetricError::InvalidInput("air velocity must be >= 0"));
        }
        if !(0.0..=100.0).contains(&self.relative_humidity_pct) {
            return Err(MetricError::InvalidInput(
                "relative humidity must be in [0, 100]",
            ));
        }
        if self.metabolic_rate_met <= 0.0 {
            return Err(MetricError::InvalidInput("metabolic rate must be > 0"));
        }
        if self.clothing_clo < 0.0 {
            return Err(MetricError::InvalidInput(
                "clothing insulation must be >= 0",
            ));
        }
        Ok(())
    }
}

/// Predicted Mean Vote and Predicted Percentage of Dissatisfied.
#[derive(Debug, Clone, PartialEq)]
pub struct ComfortIndices {
    /// PMV on the seven-point thermal sensation scale (-3 cold .. +3 hot).
    pub pmv: f64,
    /// PPD (%), always in [5, 100].
    pub ppd: f64,
}

impl fmt::Display for ComfortIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PMV={:+.2}  PPD={:.1}%", self.pmv, self.ppd)
    }
}

/// Predicted Percentage of Dissatisfied for a given PMV.
pub fn ppd_from_pmv(pmv: f64) -> f64 {
    100.0 - 95.0 * (-0.033_53 * pmv.powi(4) - 0.2179 * pmv.powi(2)).exp()
}

/// Computes PMV and PPD for steady-state conditions.
///
/// Solves the clothing surface temperature by fixed-point iteration, then
/// evaluates the six heat-loss terms of the ISO 7730 comfort equation.
/// Assumes zero external work.
///
/// # Errors
///
/// Returns [`MetricError::InvalidInput`] for non-finite or out-of-band
/// inputs and [`MetricError::NonConvergence`] if the surface temperature
/// iteration does not settle within the iteration cap.
pub fn pmv_ppd(input: &ComfortInput) -> Result<ComfortIndices, MetricError> {
    input.validate()?;

    let ta = input.air_temp_c;
    let tr = input.mean_radiant_temp_c;
    let vel = input.air_velocity_m_s;
    let rh = input.relative_humidity_pct;

    // Water vapour partial pressure (Pa).
    let pa = rh * 10.0 * (16.6536 - 4030.183 / (ta + 235.0)).exp();

    // Clothing insulation (m²·K/W) and metabolic rate (W/m²).
    let icl = 0.155 * input.clothing_clo;
    let m = input.metabolic_rate_met * 58.15;
    let mw = m; // zero external work

    // Clothing area factor.
    let fcl = if icl <= 0.078 {
        1.0 + 1.29 * icl
    } else {
        1.05 + 0.645 * icl
    };

    // Forced-convection coefficient.
    let hcf = 12.1 * vel.sqrt();

    let taa = ta + 273.0;
    let tra = tr + 273.0;

    // Initial clothing surface temperature guess.
    let tcla = taa + (35.5 - ta) / (3.5 * icl + 0.1);

    let p1 = icl * fcl;
    let p2 = p1 * 3.96;
    let p3 = p1 * 100.0;
    let p4 = p1 * taa;
    let p5 = 308.7 - 0.028 * mw + p2 * (tra / 100.0).powi(4);

    let mut xn = tcla / 100.0;
    let mut xf = tcla / 50.0;
    let mut hc = hcf;
    let mut converged = false;

    for _ in 0..MAX_ITERATIONS {
        xf = (xf + xn) / 2.0;
        let hcn = 2.38 * (100.0 * xf - taa).abs().powf(0.25);
        hc = hcf.max(hcn);
        xn = (p5 + p4 * hc - p2 * xf.powi(4)) / (100.0 + p3 * hc);
        if (xn - xf).abs() <= EPS {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(MetricError::NonConvergence);
    }

    let tcl = 100.0 * xn - 273.0;

    // Heat losses: skin diffusion, sweating, latent and dry respiration,
    // radiation, convection.
    let hl1 = 3.05 * 0.001 * (5733.0 - 6.99 * mw - pa);
    let hl2 = if mw > 58.15 { 0.42 * (mw - 58.15) } else { 0.0 };
    let hl3 = 1.7e-5 * m * (5867.0 - pa);
    let hl4 = 0.0014 * m * (34.0 - ta);
    let hl5 = 3.96 * fcl * (xn.powi(4) - (tra / 100.0).powi(4));
    let hl6 = fcl * hc * (tcl - ta);

    let ts = 0.303 * (-0.036 * m).exp() + 0.028;
    let pmv = ts * (mw - hl1 - hl2 - hl3 - hl4 - hl5 - hl6);

    Ok(ComfortIndices {
        pmv,
        ppd: ppd_from_pmv(pmv),
    })
}
