//! Activity quantities entered by the user.
//!
//! Inputs are created from user entry, consumed immediately by the
//! calculator, and not retained between calculations. Range clamping is the
//! responsibility of this input-collection layer: the calculator itself
//! assumes already-validated values.

use crate::factors::FreightMode;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Declared electricity input range (kWh per month).
pub const ELECTRICITY_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
/// Declared range for each freight weight (kg) and distance (km).
pub const FREIGHT_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// One freight mode's activity: total goods weight and haul distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreightActivity {
    /// Total weight of goods transported (kg).
    pub weight_kg: f64,
    /// Total distance the goods travelled (km).
    pub distance_km: f64,
}

impl FreightActivity {
    pub fn new(weight_kg: f64, distance_km: f64) -> Self {
        Self {
            weight_kg,
            distance_km,
        }
    }

    fn clamped(&self, mode: FreightMode) -> Self {
        Self {
            weight_kg: clamp_field(
                &format!("{}.weight_kg", mode.key()),
                self.weight_kg,
                &FREIGHT_RANGE,
            ),
            distance_km: clamp_field(
                &format!("{}.distance_km", mode.key()),
                self.distance_km,
                &FREIGHT_RANGE,
            ),
        }
    }
}

/// Activity quantities for one calculation.
///
/// Every field defaults to 0, matching an untouched input form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityInputs {
    /// Monthly electricity consumption (kWh).
    pub electricity_kwh: f64,
    pub road: FreightActivity,
    pub rail: FreightActivity,
    pub sea: FreightActivity,
    pub air: FreightActivity,
}

impl ActivityInputs {
    /// Activity for a freight mode.
    pub fn freight(&self, mode: FreightMode) -> FreightActivity {
        match mode {
            FreightMode::Road => self.road,
            FreightMode::Rail => self.rail,
            FreightMode::Sea => self.sea,
            FreightMode::Air => self.air,
        }
    }

    /// Returns a copy with every field clamped into its declared range.
    ///
    /// Non-finite entries clamp to 0. Each adjustment logs a warning.
    pub fn clamped(&self) -> Self {
        Self {
            electricity_kwh: clamp_field("electricity_kwh", self.electricity_kwh, &ELECTRICITY_RANGE),
            road: self.road.clamped(FreightMode::Road),
            rail: self.rail.clamped(FreightMode::Rail),
            sea: self.sea.clamped(FreightMode::Sea),
            air: self.air.clamped(FreightMode::Air),
        }
    }
}

fn clamp_field(name: &str, value: f64, range: &RangeInclusive<f64>) -> f64 {
    let clamped = if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        0.0
    };
    if clamped != value {
        log::warn!(
            "{name} = {value} is outside [{}, {}], clamped to {clamped}",
            range.start(),
            range.end()
        );
    }
    clamped
}
