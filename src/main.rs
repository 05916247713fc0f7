//! Carbon footprint calculator CLI.
//!
//! Collects activity quantities from flags or a TOML scenario file, clamps
//! them into their declared ranges, runs the calculator for the selected
//! country, and renders the result as terminal charts and summary text.
//!
//! # Usage
//!
//! ```bash
//! footprint --country India --electricity 100 --road-weight 10 --road-distance 10
//! footprint --scenario warehouse.toml --format json
//! ```

mod scenario;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use footprint_core::calculator::{EmissionResult, EmissionsCalculator};
use footprint_core::country::Country;
use footprint_core::factors::FactorTable;
use footprint_core::inputs::ActivityInputs;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

/// Carbon footprint estimator for a small organization
#[derive(Parser, Debug)]
#[command(name = "footprint")]
#[command(about = "Estimate yearly CO2 emissions from electricity and freight activity")]
struct Args {
    /// Country whose emission factors to use (India, Indonesia, US, UK; defaults to India)
    #[arg(short, long)]
    country: Option<Country>,

    /// Monthly electricity consumption in kWh (0-1000)
    #[arg(long)]
    electricity: Option<f64>,

    /// Weight of goods transported by road freight in kg (0-100)
    #[arg(long)]
    road_weight: Option<f64>,
    /// Distance of goods transported by road freight in km (0-100)
    #[arg(long)]
    road_distance: Option<f64>,

    /// Weight of goods transported by rail freight in kg (0-100)
    #[arg(long)]
    rail_weight: Option<f64>,
    /// Distance of goods transported by rail freight in km (0-100)
    #[arg(long)]
    rail_distance: Option<f64>,

    /// Weight of goods transported by sea freight in kg (0-100)
    #[arg(long)]
    sea_weight: Option<f64>,
    /// Distance of goods transported by sea freight in km (0-100)
    #[arg(long)]
    sea_distance: Option<f64>,

    /// Weight of goods transported by air freight in kg (0-100)
    #[arg(long)]
    air_weight: Option<f64>,
    /// Distance of goods transported by air freight in km (0-100)
    #[arg(long)]
    air_distance: Option<f64>,

    /// Scenario file (TOML) providing the country and activity inputs;
    /// flags override scenario values
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Replacement emission factor table (TOML), validated on load
    #[arg(long)]
    factors: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    country: Country,
    #[serde(flatten)]
    emissions: &'a EmissionResult,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut scenario = match &args.scenario {
        Some(path) => scenario::load_scenario(path)?,
        None => Scenario::default(),
    };
    apply_overrides(&mut scenario.inputs, &args);

    let country = args.country.or(scenario.country).unwrap_or(Country::India);

    let table = match &args.factors {
        Some(path) => scenario::load_factor_table(path)?,
        None => FactorTable::builtin(),
    };
    let factors = table.get(country)?;

    let inputs = scenario.inputs.clamped();
    let calculator = EmissionsCalculator::from_factors(factors.clone());
    let result = calculator.calculate_checked(&inputs)?;

    match args.format {
        OutputFormat::Text => print!("{}", footprint_report::render(country, &result)),
        OutputFormat::Json => {
            let output = JsonOutput {
                country,
                emissions: &result,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn apply_overrides(inputs: &mut ActivityInputs, args: &Args) {
    if let Some(value) = args.electricity {
        inputs.electricity_kwh = value;
    }
    if let Some(value) = args.road_weight {
        inputs.road.weight_kg = value;
    }
    if let Some(value) = args.road_distance {
        inputs.road.distance_km = value;
    }
    if let Some(value) = args.rail_weight {
        inputs.rail.weight_kg = value;
    }
    if let Some(value) = args.rail_distance {
        inputs.rail.distance_km = value;
    }
    if let Some(value) = args.sea_weight {
        inputs.sea.weight_kg = value;
    }
    if let Some(value) = args.sea_distance {
        inputs.sea.distance_km = value;
    }
    if let Some(value) = args.air_weight {
        inputs.air.weight_kg = value;
    }
    if let Some(value) = args.air_distance {
        inputs.air.distance_km = value;
    }
}
