//! Result summary text blocks.
//!
//! Mirrors the on-screen report: per-block totals with their unit labels,
//! the combined footprint, and a fixed per-capita context paragraph for the
//! selected country. The transportation block is labeled "kg CO2e" and the
//! electricity block "tonnes CO2"; see the calculator module docs for the
//! unit caveat behind those labels.

use colored::Colorize;
use footprint_core::calculator::EmissionResult;
use footprint_core::country::Country;

/// Transportation total with its unit label.
pub fn transportation_block(result: &EmissionResult) -> String {
    format!(
        "{} Transportation: {:.2} kg CO2e per year",
        "[i]".blue().bold(),
        result.transportation
    )
}

/// Electricity total with its unit label.
pub fn electricity_block(result: &EmissionResult) -> String {
    format!(
        "{} Electricity: {:.2} tonnes CO2 per year",
        "[i]".blue().bold(),
        result.electricity
    )
}

/// Combined yearly footprint.
pub fn total_block(result: &EmissionResult) -> String {
    format!(
        "{} Your total carbon footprint is: {:.2} kg CO2e per year",
        "[+]".green().bold(),
        result.total
    )
}

/// Fixed per-capita statistic for the selected country.
///
/// The statistic text is static in this version; only the country's display
/// name is interpolated, nothing is derived from the factor table.
pub fn country_context(country: Country) -> String {
    let name = country.display_name();
    format!(
        "{} In 2021, CO2 emissions per capita for {name} was 1.9 tons of CO2 \
         per capita. Between 1972 and 2021, CO2 emissions per capita of {name} \
         grew substantially from 0.39 to 1.9 tons of CO2 per capita rising at \
         an increasing annual rate that reached a maximum of 9.41% in 2021",
        "[*]".yellow().bold()
    )
}
