//! Scenario and factor-table files.
//!
//! Both file kinds are TOML. A scenario holds the calculator inputs for one
//! run; a factor-table file replaces the builtin per-country coefficients,
//! for example to try updated grid intensities. Loaded factor tables are
//! validated before use so a bad coefficient fails the run instead of
//! skewing the result.

use anyhow::{Context, Result};
use footprint_core::country::Country;
use footprint_core::factors::FactorTable;
use footprint_core::inputs::ActivityInputs;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A saved set of calculator inputs.
///
/// ```toml
/// country = "India"
/// electricity_kwh = 100.0
///
/// [road]
/// weight_kg = 10.0
/// distance_km = 10.0
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub country: Option<Country>,
    #[serde(flatten)]
    pub inputs: ActivityInputs,
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
    let scenario: Scenario = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse scenario file {}", path.display()))?;
    tracing::debug!("Loaded scenario from {}", path.display());
    Ok(scenario)
}

pub fn load_factor_table(path: &Path) -> Result<FactorTable> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read factor table {}", path.display()))?;
    let table: FactorTable = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse factor table {}", path.display()))?;
    table
        .validate()
        .with_context(|| format!("Invalid factor table {}", path.display()))?;
    tracing::debug!(
        "Loaded factor table with {} countries from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}
