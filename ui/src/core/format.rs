//! Formatting helpers for presenting scores.

/// Percentage label as shown inside the donut: `91.17` → `"91.17%"`, `100.0` → `"100%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}
