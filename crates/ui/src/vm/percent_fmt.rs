/// `0.853` -> `"85.3%"`.
#[must_use]
pub fn format_ratio_percent(ratio: f64) -> String {
    format_percent(ratio * 100.0)
}

/// Value that is already a percentage, e.g. a pass rate of `75.0`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
