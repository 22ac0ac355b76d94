//! CSS number formatting
//!
//! Numbers in visual style records are written the way the design tool's
//! scripting host prints them: integers without a fractional part, the
//! shortest round-trip form otherwise, exponent notation outside
//! `[1e-6, 1e21)`, and `undefined` for a value that was never supplied.

/// Placeholder written where an optional numeric or unit field is missing.
pub const UNDEFINED: &str = "undefined";

/// Format a number for embedding in a CSS value.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers negative zero as well
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Format an optional number, writing [`UNDEFINED`] when it is absent.
pub fn format_opt_number(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), format_number)
}

/// Format a pixel length: `14` becomes `14px`.
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}
