//! Rendering for footprint results.
//!
//! Everything here consumes an already-computed
//! [`EmissionResult`](footprint_core::calculator::EmissionResult); no
//! calculation happens in this crate. Output goes to the terminal as
//! colored text: a bar chart and share breakdown over the five emission
//! categories, followed by the summary blocks.

pub mod chart;
pub mod layout;
pub mod summary;

use footprint_core::calculator::EmissionResult;
use footprint_core::country::Country;

/// Renders the full results screen for one calculation.
pub fn render(country: Country, result: &EmissionResult) -> String {
    let mut out = String::new();

    out.push_str(&layout::header("Results"));
    out.push('\n');
    out.push_str(&chart::bar_chart(result));
    out.push('\n');
    out.push_str(&chart::share_chart(result));
    out.push('\n');
    out.push_str(&layout::header("Carbon Emissions by Category"));
    out.push('\n');
    out.push_str(&summary::transportation_block(result));
    out.push('\n');
    out.push_str(&summary::electricity_block(result));
    out.push('\n');
    out.push_str(&layout::header("Total Carbon Footprint"));
    out.push('\n');
    out.push_str(&summary::total_block(result));
    out.push('\n');
    out.push_str(&summary::country_context(country));
    out.push('\n');
    out.push_str(&layout::separator());
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint_core::calculator::EmissionsCalculator;
    use footprint_core::factors::FACTOR_TABLE;
    use footprint_core::inputs::{ActivityInputs, FreightActivity};

    #[test]
    fn test_render_contains_every_section() {
        colored::control::set_override(false);

        let factors = FACTOR_TABLE.get(Country::India).unwrap().clone();
        let inputs = ActivityInputs {
            electricity_kwh: 100.0,
            road: FreightActivity::new(10.0, 10.0),
            ..ActivityInputs::default()
        };
        let result = EmissionsCalculator::from_factors(factors).calculate(&inputs);

        let screen = render(Country::India, &result);
        for expected in [
            "RESULTS",
            "Road Freight",
            "Electricity",
            "kg CO2e per year",
            "tonnes CO2 per year",
            "India",
        ] {
            assert!(
                screen.contains(expected),
                "Rendered screen should contain '{expected}':\n{screen}"
            );
        }
    }
}
