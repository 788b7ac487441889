//! Display formatting for derived values.

/// Placeholder rendered for any value that cannot be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render an optional display string, substituting [`NOT_AVAILABLE`].
pub fn format_or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Integer with comma thousands separators, e.g. `860,196`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact magnitude: `1.2M`, `3.4K`, or the plain number below a thousand.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value >= 0.0 && value.fract() == 0.0 {
        format_thousands(value as u64)
    } else {
        let rounded = round_to(value, 1);
        if rounded.fract() == 0.0 {
            format!("{:.0}", rounded)
        } else {
            format!("{:.1}", rounded)
        }
    }
}

/// Percentage with one decimal, e.g. `66.7%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Hours with a fixed number of decimals, e.g. `3.25 hrs`.
pub fn format_hours(hours: f64, decimals: usize) -> String {
    format!("{:.*} hrs", decimals, hours)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
