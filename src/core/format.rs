//! Human-readable renderings shared by explanations, labels and messages.

/// `0.125` -> `"12.50%"`.
pub fn format_percentage(decimal: f64) -> String {
    format!("{:.2}%", decimal * 100.0)
}

/// `1.61051` -> `"1.61×"`.
pub fn format_multiplier(value: f64) -> String {
    format!("{value:.2}×")
}

/// Rounded to two places, shortest form, singular only for exactly one.
pub fn format_years(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let unit = if rounded == 1.0 { "year" } else { "years" };
    format!("{rounded} {unit}")
}
