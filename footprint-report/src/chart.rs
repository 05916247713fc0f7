//! Terminal charts over the five emission categories.

use crate::layout::TOTAL_WIDTH;
use colored::{Color, Colorize};
use footprint_core::calculator::EmissionResult;
use footprint_core::factors::FreightMode;
use unicode_width::UnicodeWidthStr;

const BAR_GLYPH: &str = "█";

/// Category rows in chart order: the four freight modes, then electricity.
fn categories(result: &EmissionResult) -> [(&'static str, f64); 5] {
    [
        (FreightMode::Road.label(), result.road),
        (FreightMode::Rail.label(), result.rail),
        (FreightMode::Sea.label(), result.sea),
        (FreightMode::Air.label(), result.air),
        ("Electricity", result.electricity),
    ]
}

fn row_color(index: usize) -> Color {
    match index {
        0 => Color::Blue,
        1 => Color::Green,
        2 => Color::Red,
        3 => Color::Yellow,
        _ => Color::Cyan,
    }
}

/// Renders a horizontal bar chart of per-category emissions.
///
/// Bars are scaled to the largest category. At all-zero input every bar is
/// empty and only the numeric values remain.
pub fn bar_chart(result: &EmissionResult) -> String {
    let rows = categories(result);
    let label_width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(*label))
        .max()
        .unwrap_or(0);
    // Leave room for the label column, the axis, and the value text
    let bar_area = TOTAL_WIDTH.saturating_sub(label_width + 10);
    let max_value = rows.iter().map(|(_, value)| *value).fold(0.0, f64::max);

    let mut lines = vec!["CO2 emissions by category (tonnes per year)".to_string()];
    for (index, (label, value)) in rows.iter().enumerate() {
        let filled = if max_value > 0.0 {
            ((value / max_value) * bar_area as f64).round() as usize
        } else {
            0
        };
        let bar = BAR_GLYPH.repeat(filled).color(row_color(index));
        let padding = " ".repeat(label_width - UnicodeWidthStr::width(*label));
        lines.push(format!(
            "{label}{padding} {} {bar} {value:.2}",
            "│".bright_black()
        ));
    }
    lines.join("\n")
}

/// Renders each category's share of the combined category values, the
/// terminal stand-in for a pie chart.
///
/// Shares are undefined when every category is zero; that case renders an
/// explicit line instead of dividing by zero.
pub fn share_chart(result: &EmissionResult) -> String {
    let rows = categories(result);
    let total: f64 = rows.iter().map(|(_, value)| *value).sum();
    if total <= 0.0 {
        return "No recorded emissions to chart.".to_string();
    }

    let label_width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(*label))
        .max()
        .unwrap_or(0);
    let strip_area = TOTAL_WIDTH.saturating_sub(label_width + 12);

    let mut lines = vec!["Share of total by category".to_string()];
    for (index, (label, value)) in rows.iter().enumerate() {
        let share = value / total;
        let filled = (share * strip_area as f64).round() as usize;
        let strip = BAR_GLYPH.repeat(filled).color(row_color(index));
        let padding = " ".repeat(label_width - UnicodeWidthStr::width(*label));
        lines.push(format!(
            "{label}{padding} {} {:>5.1}% {strip}",
            "│".bright_black(),
            share * 100.0
        ));
    }
    lines.join("\n")
}
