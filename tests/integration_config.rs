//! Integration tests for configuration loading and validation.

mod common;

use building_bench::analysis::AnnualReport;
use building_bench::config::AnalysisConfig;

#[test]
fn every_preset_supports_a_full_report() {
    let records = common::sample_records();
    for name in AnalysisConfig::PRESETS {
        let config = AnalysisConfig::from_preset(name).unwrap();
        assert!(config.validate().is_empty(), "preset \"{name}\" invalid");

        let report = AnnualReport::from_records(
            &records,
            config.building.floor_area_m2,
            &config.thresholds,
        );
        let report = report.unwrap_or_else(|e| panic!("preset \"{name}\" report failed: {e}"));
        assert_eq!(report.months, 12);
        assert!(report.eui_kwh_m2 > 0.0);
    }
}

#[test]
fn toml_config_drives_the_report() {
    let toml = r#"
[building]
building_type = "Clinic"
floor_area_m2 = 300.0

[thresholds]
energy_high_kwh = 250.0
energy_medium_kwh = 180.0
"#;
    let config = AnalysisConfig::from_toml_str(toml).unwrap();
    assert!(config.validate().is_empty());

    let report = AnnualReport::from_records(
        &common::sample_records(),
        config.building.floor_area_m2,
        &config.thresholds,
    )
    .unwrap();

    // 3000 kWh over 300 m²
    assert!((report.eui_kwh_m2 - 10.0).abs() < 1e-9);
    // lower High bound pulls more months into the High class:
    // 320, 280, 300, 260, 300, 330
    assert_eq!(report.class_counts.0, 6);
}

#[test]
fn invalid_toml_reports_field_errors() {
    let toml = r#"
[building]
floor_area_m2 = -10.0

[comfort]
relative_humidity_pct = 130.0
"#;
    let config = AnalysisConfig::from_toml_str(toml).unwrap();
    let errors = config.validate();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.field == "building.floor_area_m2"));
    assert!(
        errors
            .iter()
            .any(|e| e.field == "comfort.relative_humidity_pct")
    );
}

#[test]
fn unknown_preset_is_rejected() {
    let err = AnalysisConfig::from_preset("datacenter");
    assert!(err.is_err());
}

#[test]
fn unknown_toml_section_is_rejected() {
    let toml = r#"
[simulation]
steps_per_day = 24
"#;
    assert!(AnalysisConfig::from_toml_str(toml).is_err());
}
