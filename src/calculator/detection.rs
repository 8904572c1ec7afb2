//! Input detection for the calculator.
//!
//! Determines whether raw text uses only the keypad's symbol set, so callers
//! can reject foreign input before it reaches the pipeline.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digits, decimal point, operators (ASCII and glyph), parentheses,
    /// whitespace and the three trig names.
    static ref KEYPAD_INPUT: Result<Regex, regex::Error> =
        Regex::new(r"^(?:[\d\s\.\+\-−\*×/÷()]|sin|cos|tan)+$");
}

/// Known function names on the keypad.
const TRIG_NAMES: &[&str] = &["sin", "cos", "tan"];

/// Check if input is made only of keypad symbols.
///
/// Returns `false` for empty or whitespace-only input.
pub fn is_calculator_input(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return false;
    }

    match &*KEYPAD_INPUT {
        Ok(regex) => regex.is_match(trimmed),
        Err(e) => {
            tracing::warn!("Keypad input pattern unavailable: {}", e);
            true
        }
    }
}

/// Check if input contains a trig function name.
pub fn has_trig_function(input: &str) -> bool {
    TRIG_NAMES.iter().any(|name| input.contains(name))
}
