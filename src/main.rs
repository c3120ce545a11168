//! building-bench entry point — CLI wiring and config-driven analysis.

use std::path::Path;
use std::process;

use building_bench::analysis::AnnualReport;
use building_bench::comfort::pmv_ppd;
use building_bench::config::AnalysisConfig;
use building_bench::dataset::stats::describe;
use building_bench::dataset::types::MonthlyRecord;
use building_bench::dataset::{drop_missing, sample_year};
use building_bench::io::export::export_csv;
use building_bench::io::import::read_csv_records;
use building_bench::metrics::classify_building_size;
use building_bench::report::{bar_chart, histogram, line_chart, scatter};

/// Number of bins for the consumption histogram.
const HISTOGRAM_BINS: usize = 5;

/// Bar width in characters for the text charts.
const CHART_WIDTH: usize = 40;

/// Row count for the scatter grid.
const SCATTER_HEIGHT: usize = 12;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    data_path: Option<String>,
    export_path: Option<String>,
}

fn print_help() {
    eprintln!("building-bench — building energy benchmarking and comfort analysis");
    eprintln!();
    eprintln!("Usage: building-bench [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>   Load analysis config from TOML file");
    eprintln!("  --preset <name>   Use a built-in preset (baseline, residential, warehouse)");
    eprintln!("  --data <path>     Load monthly records from CSV (month,energy_kwh,temperature_c)");
    eprintln!("  --export <path>   Export the analyzed table to CSV");
    eprintln!("  --help            Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the baseline preset is used.");
    eprintln!("If no --data is given, the built-in sample year is analyzed.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        data_path: None,
        export_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--data" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --data requires a path argument");
                    process::exit(1);
                }
                cli.data_path = Some(args[i].clone());
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_path = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Loads monthly records from CSV or falls back to the built-in sample.
fn load_records(data_path: Option<&str>) -> Vec<MonthlyRecord> {
    match data_path {
        Some(path) => {
            let raw = match read_csv_records(Path::new(path)) {
                Ok(rows) => rows,
                Err(e) => {
                    eprintln!("error: failed to read \"{path}\": {e}");
                    process::exit(1);
                }
            };
            let records = drop_missing(&raw);
            let dropped = raw.len() - records.len();
            if dropped > 0 {
                eprintln!("warning: dropped {dropped} row(s) with missing values");
            }
            records
        }
        None => sample_year(),
    }
}

fn main() {
    let cli = parse_args();

    // Load config: --config takes priority, then --preset, then baseline
    let config = if let Some(ref path) = cli.config_path {
        match AnalysisConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match AnalysisConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        AnalysisConfig::baseline()
    };

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let records = load_records(cli.data_path.as_deref());

    // Building header
    let b = &config.building;
    let size = classify_building_size(
        b.floor_area_m2,
        config.thresholds.size_large_m2,
        config.thresholds.size_medium_m2,
    );
    println!(
        "{} — {:.0} m² ({size}), height {:.1} m, air conditioned: {}",
        b.building_type, b.floor_area_m2, b.height_m, b.air_conditioned
    );
    if b.air_conditioned {
        println!("Cooling set point: {:.1} °C", b.cooling_set_point_c);
    }
    println!();

    // Per-month rows
    for r in &records {
        println!("{r}");
    }

    // Column summary
    println!("\n{}", describe(&records));

    // Annual report
    let report = match AnnualReport::from_records(&records, b.floor_area_m2, &config.thresholds) {
        Ok(rep) => rep,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    println!("\n{report}");

    // Comfort indices for the configured indoor environment
    match pmv_ppd(&config.comfort.to_input()) {
        Ok(idx) => println!("\nPredicted comfort:     {idx}"),
        Err(e) => {
            eprintln!("error: comfort model failed: {e}");
            process::exit(1);
        }
    }

    // Charts: trend, bars, distribution, energy vs temperature
    let rows: Vec<(&str, f64)> = records
        .iter()
        .map(|r| (r.month.as_str(), r.energy_kwh))
        .collect();
    println!(
        "\n{}",
        line_chart("Monthly energy trend (kWh)", &rows, CHART_WIDTH)
    );
    println!("{}", bar_chart("Monthly energy (kWh)", &rows, CHART_WIDTH));
    let energy: Vec<f64> = records.iter().map(|r| r.energy_kwh).collect();
    println!(
        "{}",
        histogram(
            "Energy distribution (kWh)",
            &energy,
            HISTOGRAM_BINS,
            CHART_WIDTH
        )
    );
    let points: Vec<(f64, f64)> = records
        .iter()
        .map(|r| (r.temperature_c, r.energy_kwh))
        .collect();
    println!(
        "{}",
        scatter(
            "Energy vs temperature (x: °C, y: kWh)",
            &points,
            CHART_WIDTH,
            SCATTER_HEIGHT
        )
    );

    // Export CSV if requested
    if let Some(ref path) = cli.export_path {
        if let Err(e) = export_csv(&records, &config.thresholds, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Analyzed table written to {path}");
    }
}
