//! Shared terminal layout helpers.

use colored::Colorize;

/// Total width of rendered report lines.
pub const TOTAL_WIDTH: usize = 64;

/// Centered section header between dashed rules.
pub fn header(msg: &str) -> String {
    let formatted = format!("⟦ {} ⟧", msg.to_uppercase());
    let dash_count = TOTAL_WIDTH.saturating_sub(formatted.chars().count());
    let left = dash_count / 2;
    let right = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.bright_green(),
        "─".repeat(right).bright_black()
    )
}

/// Full-width closing rule.
pub fn separator() -> String {
    format!("{}", "═".repeat(TOTAL_WIDTH).bright_black())
}
