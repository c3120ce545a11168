//! TOML-based analysis configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::comfort::ComfortInput;

/// Top-level analysis configuration parsed from TOML.
///
/// All fields have defaults matching the baseline office. Load from TOML
/// with [`AnalysisConfig::from_toml_file`] or use
/// [`AnalysisConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Building under analysis.
    #[serde(default)]
    pub building: BuildingConfig,
    /// Classification thresholds.
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    /// Indoor environment for the comfort indices.
    #[serde(default)]
    pub comfort: ComfortConfig,
}

/// Building under analysis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingConfig {
    /// Building use type (free text, e.g. "Office").
    pub building_type: String,
    /// Conditioned floor area (m², must be > 0).
    pub floor_area_m2: f64,
    /// Overall building height (m, must be > 0).
    pub height_m: f64,
    /// Whether the building is air conditioned.
    pub air_conditioned: bool,
    /// Cooling set point (°C).
    pub cooling_set_point_c: f64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            building_type: "Office".to_string(),
            floor_area_m2: 1000.0,
            height_m: 18.2,
            air_conditioned: true,
            cooling_set_point_c: 25.0,
        }
    }
}

/// Classification thresholds for energy use and building size.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdsConfig {
    /// Monthly consumption above this is High (kWh).
    pub energy_high_kwh: f64,
    /// Monthly consumption above this is Medium (kWh).
    pub energy_medium_kwh: f64,
    /// Floor area above this is a large building (m²).
    pub size_large_m2: f64,
    /// Floor area above this is a medium building (m²).
    pub size_medium_m2: f64,
    /// Months warmer than this count as warm season (°C).
    pub warm_month_min_c: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            energy_high_kwh: 300.0,
            energy_medium_kwh: 200.0,
            size_large_m2: 500.0,
            size_medium_m2: 100.0,
            warm_month_min_c: 20.0,
        }
    }
}

/// Indoor environment used for the comfort indices.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComfortConfig {
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

impl Default for ComfortConfig {
    fn default() -> Self {
        Self {
            air_temp_c: 25.0,
            mean_radiant_temp_c: 25.0,
            air_velocity_m_s: 0.1,
            relative_humidity_pct: 50.0,
            metabolic_rate_met: 1.2,
            clothing_clo: 0.5,
        }
    }
}

impl ComfortConfig {
    /// Converts the section into the comfort model's input struct.
    pub fn to_input(&self) -> ComfortInput {
        ComfortInput {
            air_temp_c: self.air_temp_c,
            mean_radiant_temp_c: self.mean_radiant_temp_c,
            air_velocity_m_s: self.air_velocity_m_s,
            relative_humidity_pct: self.relative_humidity_pct,
            metabolic_rate_met: self.metabolic_rate_met,
            clothing_clo: self.clothing_clo,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, Error)]
#[error("config error: {field} — {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"building.floor_area_m2"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl AnalysisConfig {
    /// Returns the baseline office configuration.
    pub fn baseline() -> Self {
        Self {
            building: BuildingConfig::default(),
            thresholds: ThresholdsConfig::default(),
            comfort: ComfortConfig::default(),
        }
    }

    /// Returns the residential preset: small naturally ventilated dwelling.
    pub fn residential() -> Self {
        Self {
            building: BuildingConfig {
                building_type: "Residential".to_string(),
                floor_area_m2: 180.0,
                height_m: 8.4,
                air_conditioned: false,
                cooling_set_point_c: 26.0,
            },
            thresholds: ThresholdsConfig {
                energy_high_kwh: 250.0,
                energy_medium_kwh: 150.0,
                ..ThresholdsConfig::default()
            },
            comfort: ComfortConfig {
                air_temp_c: 26.0,
                mean_radiant_temp_c: 26.0,
                metabolic_rate_met: 1.0,
                clothing_clo: 0.4,
                ..ComfortConfig::default()
            },
        }
    }

    /// Returns the warehouse preset: large unconditioned hall, active work.
    pub fn warehouse() -> Self {
        Self {
            building: BuildingConfig {
                building_type: "Warehouse".to_string(),
                floor_area_m2: 2500.0,
                height_m: 9.0,
                air_conditioned: false,
                cooling_set_point_c: 28.0,
            },
            thresholds: ThresholdsConfig {
                energy_high_kwh: 400.0,
                energy_medium_kwh: 250.0,
                ..ThresholdsConfig::default()
            },
            comfort: ComfortConfig {
                air_temp_c: 18.0,
                mean_radiant_temp_c: 18.0,
                air_velocity_m_s: 0.2,
                metabolic_rate_met: 1.8,
                clothing_clo: 0.8,
                ..ComfortConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "residential", "warehouse"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "residential" => Ok(Self::residential()),
            "warehouse" => Ok(Self::warehouse()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // TOML accepts nan/inf floats, which slip through the range checks
        for (field, value) in [
            ("building.floor_area_m2", self.building.floor_area_m2),
            ("building.height_m", self.building.height_m),
            (
                "building.cooling_set_point_c",
                self.building.cooling_set_point_c,
            ),
            ("thresholds.energy_high_kwh", self.thresholds.energy_high_kwh),
            (
                "thresholds.energy_medium_kwh",
                self.thresholds.energy_medium_kwh,
            ),
            ("thresholds.size_large_m2", self.thresholds.size_large_m2),
            ("thresholds.size_medium_m2", self.thresholds.size_medium_m2),
            ("thresholds.warm_month_min_c", self.thresholds.warm_month_min_c),
            ("comfort.air_temp_c", self.comfort.air_temp_c),
            ("comfort.mean_radiant_temp_c", self.comfort.mean_radiant_temp_c),
            ("comfort.air_velocity_m_s", self.comfort.air_velocity_m_s),
            (
                "comfort.relative_humidity_pct",
                self.comfort.relative_humidity_pct,
            ),
            ("comfort.metabolic_rate_met", self.comfort.metabolic_rate_met),
            ("comfort.clothing_clo", self.comfort.clothing_clo),
        ] {
            if !value.is_finite() {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be a finite number".into(),
                });
            }
        }

        let b = &self.building;
        if b.floor_area_m2 <= 0.0 {
            errors.push(ConfigError {
                field: "building.floor_area_m2".into(),
                message: "must be > 0".into(),
            });
        }
        if b.height_m <= 0.0 {
            errors.push(ConfigError {
                field: "building.height_m".into(),
                message: "must be > 0".into(),
            });
        }

        let t = &self.thresholds;
        if t.energy_high_kwh <= t.energy_medium_kwh {
            errors.push(ConfigError {
                field: "thresholds.energy_high_kwh".into(),
                message: "must be > thresholds.energy_medium_kwh".into(),
            });
        }
        if t.energy_medium_kwh < 0.0 {
            errors.push(ConfigError {
                field: "thresholds.energy_medium_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if t.size_large_m2 <= t.size_medium_m2 {
            errors.push(ConfigError {
                field: "thresholds.size_large_m2".into(),
                message: "must be > thresholds.size_medium_m2".into(),
            });
        }

        let c = &self.comfort;
        if c.air_velocity_m_s < 0.0 {
            errors.push(ConfigError {
                field: "comfort.air_velocity_m_s".into(),
                message: "must be >= 0".into(),
            });
        }
        if !(0.0..=100.0).contains(&c.relative_humidity_pct) {
            errors.push(ConfigError {
                field: "comfort.relative_humidity_pct".into(),
                message: "must be in [0.0, 100.0]".into(),
            });
        }
        if c.metabolic_rate_met <= 0.0 {
            errors.push(ConfigError {
                field: "comfort.metabolic_rate_met".into(),
                message: "must be > 0".into(),
            });
        }
        if c.clothing_clo < 0.0 {
            errors.push(ConfigError {
                field: "comfort.clothing_clo".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }
}
