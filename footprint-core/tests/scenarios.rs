//! End-to-end scenarios for the footprint calculator.
//!
//! These tests run the full path a caller uses: look a country up in the
//! builtin table, build a calculator, and check the rendered result against
//! hand-computed values.

use approx::assert_abs_diff_eq;
use footprint_core::calculator::{round2, EmissionsCalculator};
use footprint_core::country::Country;
use footprint_core::factors::{FreightMode, FACTOR_TABLE};
use footprint_core::inputs::{ActivityInputs, FreightActivity};

fn calculate(country: Country, inputs: &ActivityInputs) -> footprint_core::calculator::EmissionResult {
    let factors = FACTOR_TABLE
        .get(country)
        .expect("builtin table covers every country");
    EmissionsCalculator::from_factors(factors.clone())
        .calculate_checked(inputs)
        .expect("finite inputs")
}

mod worked_examples {
    use super::*;

    /// India, 100 kWh/month and 10 kg of road goods over 10 km.
    #[test]
    fn test_india_road_and_electricity() {
        let inputs = ActivityInputs {
            electricity_kwh: 100.0,
            road: FreightActivity::new(10.0, 10.0),
            ..ActivityInputs::default()
        };

        let result = calculate(Country::India, &inputs);
        assert_abs_diff_eq!(result.road, 0.02, epsilon = 1e-12);
        assert_abs_diff_eq!(result.electricity, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.transportation, 0.02, epsilon = 1e-12);
        assert_abs_diff_eq!(result.total, 0.02, epsilon = 1e-12);
    }

    /// UK, electricity only at the top of its range.
    #[test]
    fn test_uk_electricity_only() {
        let inputs = ActivityInputs {
            electricity_kwh: 1000.0,
            ..ActivityInputs::default()
        };

        let result = calculate(Country::Uk, &inputs);
        assert_abs_diff_eq!(result.electricity, 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(result.transportation, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.total, 0.01, epsilon = 1e-12);
    }

    /// Air freight dominates the other modes at equal activity.
    #[test]
    fn test_air_freight_dominates_at_equal_activity() {
        let mut results = Vec::new();
        for mode in FreightMode::ALL {
            let mut inputs = ActivityInputs::default();
            match mode {
                FreightMode::Road => inputs.road = FreightActivity::new(100.0, 100.0),
                FreightMode::Rail => inputs.rail = FreightActivity::new(100.0, 100.0),
                FreightMode::Sea => inputs.sea = FreightActivity::new(100.0, 100.0),
                FreightMode::Air => inputs.air = FreightActivity::new(100.0, 100.0),
            }
            results.push((mode, calculate(Country::Us, &inputs).transportation));
        }

        let air = results
            .iter()
            .find(|(mode, _)| *mode == FreightMode::Air)
            .unwrap()
            .1;
        for (mode, transportation) in results {
            assert!(
                air >= transportation,
                "Air ({air}) should emit at least as much as {mode} ({transportation})"
            );
        }
    }
}

mod cross_country {
    use super::*;

    /// Holding activity fixed, only the electricity category moves with the
    /// country; freight factors are identical across the bundled table.
    #[test]
    fn test_only_electricity_varies_with_country() {
        let inputs = ActivityInputs {
            electricity_kwh: 1000.0,
            road: FreightActivity::new(100.0, 100.0),
            rail: FreightActivity::new(100.0, 100.0),
            sea: FreightActivity::new(100.0, 100.0),
            air: FreightActivity::new(100.0, 100.0),
        };

        let reference = calculate(Country::India, &inputs);
        for country in Country::ALL {
            let result = calculate(country, &inputs);
            assert_abs_diff_eq!(
                result.transportation,
                reference.transportation,
                epsilon = 1e-12
            );
            for mode in FreightMode::ALL {
                assert_abs_diff_eq!(
                    result.category(mode),
                    reference.category(mode),
                    epsilon = 1e-12
                );
            }
        }

        // 12000 kWh/yr at 0.82 vs 0.45 g/kWh lands on different rounded values
        let india = calculate(Country::India, &inputs).electricity;
        let us = calculate(Country::Us, &inputs).electricity;
        assert!(
            (india - us).abs() > 1e-9,
            "India ({india}) and US ({us}) electricity categories should differ"
        );
    }
}

mod properties {
    use super::*;

    /// The combined total is always the rounded sum of the two blocks.
    #[test]
    fn test_total_identity_over_input_grid() {
        let levels = [0.0, 1.0, 37.5, 100.0];
        for &weight in &levels {
            for &distance in &levels {
                for &kwh in &[0.0, 250.0, 1000.0] {
                    let inputs = ActivityInputs {
                        electricity_kwh: kwh,
                        road: FreightActivity::new(weight, distance),
                        sea: FreightActivity::new(distance, weight),
                        ..ActivityInputs::default()
                    };
                    let result = calculate(Country::Indonesia, &inputs);
                    assert_abs_diff_eq!(
                        result.total,
                        round2(result.transportation + result.electricity),
                        epsilon = 1e-12
                    );
                }
            }
        }
    }

    /// Results never go negative for in-range inputs.
    #[test]
    fn test_results_non_negative() {
        let inputs = ActivityInputs {
            electricity_kwh: 1000.0,
            road: FreightActivity::new(100.0, 100.0),
            rail: FreightActivity::new(0.5, 0.5),
            sea: FreightActivity::new(100.0, 0.1),
            air: FreightActivity::new(42.0, 17.0),
        };
        for country in Country::ALL {
            let result = calculate(country, &inputs);
            for mode in FreightMode::ALL {
                assert!(result.category(mode) >= 0.0);
            }
            assert!(result.electricity >= 0.0);
            assert!(result.transportation >= 0.0);
            assert!(result.total >= 0.0);
        }
    }
}
