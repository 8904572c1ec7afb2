//! Result formatting.
//!
//! Integers print without a fractional part, everything else keeps Rust's
//! shortest round-trip form, and magnitudes below [`ZERO_THRESHOLD`] print as
//! `"0"` so floating-point noise from trig never reaches the display.

use crate::error::EvalError;

/// Magnitudes below this are displayed as exact zero.
pub const ZERO_THRESHOLD: f64 = 1e-10;

/// Format a finite value for display.
///
/// Returns [`EvalError::NonFinite`] for infinity and NaN so they can never be
/// mistaken for a numeric result.
pub fn format_result(value: f64) -> Result<String, EvalError> {
    if !value.is_finite() {
        return Err(EvalError::NonFinite(value));
    }
    Ok(format_number(value))
}

/// Format a value that is already known to be finite.
pub fn format_number(value: f64) -> String {
    if value.abs() < ZERO_THRESHOLD {
        return "0".to_string();
    }

    if value.fract() == 0.0 {
        // `{:.0}` never switches to exponent notation, even past i64 range
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Insert thousands separators into the integer part of a display string.
///
/// Strings that don't look like a formatted number are returned unchanged.
pub fn group_digits(display: &str) -> String {
    let (sign, unsigned) = match display.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", display),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return display.to_string();
    }

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, grouped, frac_part)
}
