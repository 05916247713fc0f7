//! Emission factor table.
//!
//! An emission factor converts an activity quantity into an emitted mass of
//! CO2 equivalent. Freight factors are expressed in kg CO2e per kg·km of
//! goods moved; the electricity factor is the grid intensity in g CO2e per
//! kWh generated.
//!
//! The table is an immutable configuration structure: built once at process
//! start and passed explicitly to the calculator, never consulted as
//! ambient mutable state. [`FactorTable::builtin`] carries the bundled
//! per-country coefficients; a replacement table can be deserialized from
//! TOML and checked with [`FactorTable::validate`] before use.

use crate::country::Country;
use crate::errors::{FootprintError, FootprintResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Freight transport categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FreightMode {
    Road,
    Rail,
    Sea,
    Air,
}

impl FreightMode {
    /// All freight modes, in display order.
    pub const ALL: [FreightMode; 4] = [
        FreightMode::Road,
        FreightMode::Rail,
        FreightMode::Sea,
        FreightMode::Air,
    ];

    /// Category label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            FreightMode::Road => "Road Freight",
            FreightMode::Rail => "Rail Freight",
            FreightMode::Sea => "Sea Freight",
            FreightMode::Air => "Air Freight",
        }
    }

    /// Short lowercase key used for field naming in messages and files.
    pub fn key(&self) -> &'static str {
        match self {
            FreightMode::Road => "road",
            FreightMode::Rail => "rail",
            FreightMode::Sea => "sea",
            FreightMode::Air => "air",
        }
    }
}

impl fmt::Display for FreightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// The bundled freight coefficients are shared by every country; only the
// grid electricity intensity differs between entries.
const ROAD_FREIGHT_KG_CO2E_PER_KG_KM: f64 = 0.00016667;
const RAIL_FREIGHT_KG_CO2E_PER_KG_KM: f64 = 0.00002273;
const SEA_FREIGHT_KG_CO2E_PER_KG_KM: f64 = 0.00004167;
const AIR_FREIGHT_KG_CO2E_PER_KG_KM: f64 = 0.00083333;

/// Per-country emission coefficients.
///
/// Freight coefficients are in kg CO2e per kg·km. The electricity
/// coefficient is in g CO2e per kWh. All coefficients are non-negative;
/// tables loaded from configuration are checked with [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    pub road_freight: f64,
    pub rail_freight: f64,
    pub sea_freight: f64,
    pub air_freight: f64,
    pub electricity: f64,
}

impl EmissionFactors {
    /// Bundled factors for a grid with the given electricity intensity
    /// (g CO2e per kWh).
    fn with_grid_intensity(electricity: f64) -> Self {
        Self {
            road_freight: ROAD_FREIGHT_KG_CO2E_PER_KG_KM,
            rail_freight: RAIL_FREIGHT_KG_CO2E_PER_KG_KM,
            sea_freight: SEA_FREIGHT_KG_CO2E_PER_KG_KM,
            air_freight: AIR_FREIGHT_KG_CO2E_PER_KG_KM,
            electricity,
        }
    }

    /// Coefficient for a freight mode.
    pub fn freight(&self, mode: FreightMode) -> f64 {
        match mode {
            FreightMode::Road => self.road_freight,
            FreightMode::Rail => self.rail_freight,
            FreightMode::Sea => self.sea_freight,
            FreightMode::Air => self.air_freight,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("road_freight", self.road_freight),
            ("rail_freight", self.rail_freight),
            ("sea_freight", self.sea_freight),
            ("air_freight", self.air_freight),
            ("electricity", self.electricity),
        ]
    }

    /// Checks that every coefficient is a non-negative finite number.
    pub fn validate(&self, country: Country) -> FootprintResult<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::InvalidFactor {
                    country: country.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// The process-wide builtin factor table.
pub static FACTOR_TABLE: LazyLock<FactorTable> = LazyLock::new(FactorTable::builtin);

/// Registry of per-country emission factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable {
    countries: HashMap<Country, EmissionFactors>,
}

impl FactorTable {
    /// Builds the bundled table covering every [`Country`].
    pub fn builtin() -> Self {
        let mut countries = HashMap::new();
        countries.insert(Country::India, EmissionFactors::with_grid_intensity(0.82));
        countries.insert(Country::Indonesia, EmissionFactors::with_grid_intensity(0.6));
        countries.insert(Country::Us, EmissionFactors::with_grid_intensity(0.45));
        countries.insert(Country::Uk, EmissionFactors::with_grid_intensity(0.75));
        Self { countries }
    }

    /// Looks up the factors for a country.
    ///
    /// The builtin table covers every `Country`, but a table loaded from
    /// configuration may not; a missing entry is a configuration error
    /// surfaced to the caller, never silently defaulted.
    pub fn get(&self, country: Country) -> FootprintResult<&EmissionFactors> {
        log::debug!("Looking up emission factors for {country}");
        self.countries
            .get(&country)
            .ok_or_else(|| FootprintError::UnknownCountry(country.to_string()))
    }

    /// Checks every entry with [`EmissionFactors::validate`].
    pub fn validate(&self) -> FootprintResult<()> {
        for (country, factors) in &self.countries {
            factors.validate(*country)?;
        }
        Ok(())
    }

    /// Number of countries in the table.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
