//! Numeric evaluation over decimal-string operands.
//!
//! Operands are parsed as `f64` and results are written back with the
//! shortest round-trip formatting. There is no rounding policy and no
//! special case for division by zero: non-finite results come back as
//! `Infinity`, `-Infinity` or `NaN`.

use super::operator::Operator;

/// Evaluate `a op b` and format the result.
///
/// # Example
///
/// ```rust
/// use calcore::core::{evaluate, Operator};
///
/// assert_eq!(evaluate("6", "3", Operator::Divide), "2");
/// assert_eq!(evaluate("50", "10", Operator::Percent), "5");
/// assert_eq!(evaluate("5", "0", Operator::Divide), "Infinity");
/// ```
pub fn evaluate(a: &str, b: &str, op: Operator) -> String {
    format_number(op.apply(parse_operand(a), parse_operand(b)))
}

/// Parse an operand string.
///
/// Empty input reads as zero and anything unparseable as `NaN`, so
/// evaluation stays total even for hand-edited history.
pub fn parse_operand(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format a number the way a calculator display shows it.
///
/// Integral values carry no fractional part, negative zero prints as `0`,
/// and magnitudes outside `[1e-6, 1e21)` switch to exponent notation with
/// an explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let label = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return label.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}
