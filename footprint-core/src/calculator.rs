//! Footprint calculator.
//!
//! # What This Calculator Does
//!
//! 1. Converts the monthly electricity reading to a yearly one (×12)
//! 2. Computes per-mode freight emissions as `factor × weight × distance`
//! 3. Sums the four freight categories into a transportation total
//! 4. Normalises the electricity product by 1/1,000,000 for display
//! 5. Combines transportation and electricity into the yearly total
//!
//! Every output field is rounded to two decimal places. The calculation is
//! a single stateless transformation, re-run from scratch on every
//! interaction; it holds no state between calls and completes on the
//! calling thread.
//!
//! # Unit Caveats
//!
//! The two category values are *not* in a consistent unit before display.
//! The raw electricity product (g CO2e, from a g/kWh factor) is scaled by
//! 1/1,000,000 into tonnes, while the freight sum (kg CO2e, from kg/kg·km
//! factors) is left unscaled, yet both are added into one total reported
//! as "kg CO2e per year". Treat the combined total as an index rather than
//! a physically consistent mass.

use crate::errors::{FootprintError, FootprintResult};
use crate::factors::{EmissionFactors, FreightMode};
use crate::inputs::{ActivityInputs, FreightActivity};
use serde::{Deserialize, Serialize};

/// Months in a year, for the monthly→yearly electricity conversion.
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Divisor normalising the raw electricity product (g CO2e) into tonnes.
pub const GRAMS_PER_TONNE: f64 = 1_000_000.0;

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computed emissions for one set of activity inputs.
///
/// Freight categories and `transportation` are in kg CO2e per year;
/// `electricity` is in tonnes CO2 per year (see the module docs on units).
/// Every field is rounded to two decimal places. `transportation` rounds
/// the *unrounded* freight sum, so it can differ in the last digit from
/// summing the already-rounded category fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    pub road: f64,
    pub rail: f64,
    pub sea: f64,
    pub air: f64,
    pub electricity: f64,
    /// Sum of the four freight categories.
    pub transportation: f64,
    /// Combined yearly footprint.
    pub total: f64,
}

impl EmissionResult {
    /// Category value for a freight mode.
    pub fn category(&self, mode: FreightMode) -> f64 {
        match mode {
            FreightMode::Road => self.road,
            FreightMode::Rail => self.rail,
            FreightMode::Sea => self.sea,
            FreightMode::Air => self.air,
        }
    }
}

/// Footprint calculator for one country's emission factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionsCalculator {
    factors: EmissionFactors,
}

impl EmissionsCalculator {
    /// Create a new calculator from a country's emission factors.
    pub fn from_factors(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    /// Get the factors.
    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Converts a monthly electricity reading to a yearly one.
    ///
    /// Scaling is unconditional: at 0 kWh the monthly/yearly distinction is
    /// invisible anyway since 0 × 12 = 0.
    pub fn yearly_electricity(kwh_per_month: f64) -> f64 {
        kwh_per_month * MONTHS_PER_YEAR
    }

    /// Emissions for one freight mode (kg CO2e).
    pub fn freight_emissions(&self, mode: FreightMode, activity: FreightActivity) -> f64 {
        self.factors.freight(mode) * activity.weight_kg * activity.distance_km
    }

    /// Runs the full calculation.
    ///
    /// Pure and deterministic: identical factors and inputs always yield an
    /// identical result. Performs no input validation; non-finite inputs
    /// propagate into the result. Use [`calculate_checked`](Self::calculate_checked)
    /// to reject them instead.
    pub fn calculate(&self, inputs: &ActivityInputs) -> EmissionResult {
        let road = self.freight_emissions(FreightMode::Road, inputs.road);
        let rail = self.freight_emissions(FreightMode::Rail, inputs.rail);
        let sea = self.freight_emissions(FreightMode::Sea, inputs.sea);
        let air = self.freight_emissions(FreightMode::Air, inputs.air);

        // The transportation total rounds the raw sum, not the addends
        let transportation = round2(road + rail + sea + air);

        let yearly_kwh = Self::yearly_electricity(inputs.electricity_kwh);
        let electricity = round2(self.factors.electricity * yearly_kwh / GRAMS_PER_TONNE);

        let total = round2(transportation + electricity);

        log::debug!(
            "Calculated emissions: transportation={transportation}, \
             electricity={electricity}, total={total}"
        );

        EmissionResult {
            road: round2(road),
            rail: round2(rail),
            sea: round2(sea),
            air: round2(air),
            electricity,
            transportation,
            total,
        }
    }

    /// Like [`calculate`](Self::calculate), but rejects non-finite inputs first.
    pub fn calculate_checked(&self, inputs: &ActivityInputs) -> FootprintResult<EmissionResult> {
        check_finite("electricity_kwh", inputs.electricity_kwh)?;
        for mode in FreightMode::ALL {
            let activity = inputs.freight(mode);
            check_finite(&format!("{}.weight_kg", mode.key()), activity.weight_kg)?;
            check_finite(&format!("{}.distance_km", mode.key()), activity.distance_km)?;
        }
        Ok(self.calculate(inputs))
    }
}

fn check_finite(name: &str, value: f64) -> FootprintResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FootprintError::NonFiniteInput {
            name: name.to_string(),
            value,
        })
    }
}
