//! Decimal text <-> f64 for the numeric summary-statistic columns.

/// Parses a decimal field. Surrounding whitespace is ignored and the usual
/// float spellings (`1e-8`, `.5`, `nan`, `inf`) are accepted; anything else,
/// including `NA` and the empty string, is rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Renders a value as the shortest text that round-trips.
///
/// Plain notation (always with a fractional part) is used for decimal
/// exponents in `-4..16`, scientific notation with a signed two-digit
/// exponent otherwise: `2.0`, `0.05`, `5e-08`, `1e+16`. NaN is an empty field.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..16).contains(&exponent) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
