/// Seconds with two decimals, e.g. `12.35`.
#[must_use]
pub fn format_seconds(value: f64) -> String {
    format!("{value:.2}")
}

/// Percentage with two decimals and no sign, e.g. `75.00`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}")
}
