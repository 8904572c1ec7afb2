//! Trig call folding.
//!
//! Every `sin(x)`, `cos(x)` and `tan(x)` whose argument is a plain signed
//! decimal literal is computed in degrees and replaced by its formatted value,
//! so the arithmetic evaluator never sees a function call.
//!
//! Nested calls such as `sin(cos(30))` are not folded: the argument has to be
//! a literal. The inner call is folded, the outer one is left as text and the
//! evaluator rejects it.
//!
//! Only an ASCII `-` is recognised as the argument sign. Keypad glyphs are
//! rewritten after folding, so `sin−90` (U+2212) is left unfolded and fails
//! evaluation the same way.

use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use super::format::format_result;

lazy_static! {
    /// `name(literal)` with the name in group 1 and the literal in group 2.
    static ref TRIG_CALL: Result<Regex, regex::Error> =
        Regex::new(r"(sin|cos|tan)\((-?\d+(?:\.\d+)?)\)");
}

/// Supported trig functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    /// Apply the function to an angle given in degrees.
    pub fn apply_degrees(self, degrees: f64) -> f64 {
        let radians = degrees.to_radians();
        match self {
            TrigFn::Sin => radians.sin(),
            TrigFn::Cos => radians.cos(),
            TrigFn::Tan => radians.tan(),
        }
    }

    /// The name as typed on the keypad.
    pub fn name(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }
}

impl FromStr for TrigFn {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(TrigFn::Sin),
            "cos" => Ok(TrigFn::Cos),
            "tan" => Ok(TrigFn::Tan),
            _ => Err(()),
        }
    }
}

/// Replace every literal trig call with its value.
///
/// Matches are spliced from the rightmost one back to the first so the byte
/// ranges of the remaining matches stay valid. A match whose argument fails
/// to parse, or whose value is not finite, is left as it was.
pub fn fold_trig_calls(expr: &str) -> String {
    let regex = match &*TRIG_CALL {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!("Trig call pattern unavailable, skipping: {}", e);
            return expr.to_string();
        }
    };

    let calls: Vec<_> = regex.captures_iter(expr).collect();
    let mut folded = expr.to_string();

    for caps in calls.iter().rev() {
        let (Some(whole), Some(name), Some(arg)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        let Ok(func) = name.as_str().parse::<TrigFn>() else {
            continue;
        };

        let degrees = match arg.as_str().parse::<f64>() {
            Ok(degrees) => degrees,
            Err(e) => {
                tracing::debug!("Skipping trig argument {:?}: {}", arg.as_str(), e);
                continue;
            }
        };

        let replacement = match format_result(func.apply_degrees(degrees)) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Skipping {}({}): {}", func.name(), degrees, e);
                continue;
            }
        };

        tracing::trace!("Folded {} -> {}", whole.as_str(), replacement);
        folded.replace_range(whole.range(), &replacement);
    }

    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_degrees() {
        assert_eq!(TrigFn::Sin.apply_degrees(90.0), 1.0);
        assert!((TrigFn::Cos.apply_degrees(60.0) - 0.5).abs() < 1e-12);
        assert!((TrigFn::Tan.apply_degrees(45.0) - 1.0).abs() < 1e-12);
        assert!(TrigFn::Cos.apply_degrees(90.0).abs() < 1e-10);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("sin".parse::<TrigFn>(), Ok(TrigFn::Sin));
        assert_eq!("cos".parse::<TrigFn>(), Ok(TrigFn::Cos));
        assert_eq!("tan".parse::<TrigFn>(), Ok(TrigFn::Tan));
        assert!("sec".parse::<TrigFn>().is_err());
        assert_eq!(TrigFn::Tan.name(), "tan");
    }

    #[test]
    fn test_single_call_folds() {
        assert_eq!(fold_trig_calls("sin(90)"), "1");
        assert_eq!(fold_trig_calls("cos(90)"), "0");
        assert_eq!(fold_trig_calls("sin(-90)"), "-1");
        assert_eq!(fold_trig_calls("cos(60.0)"), format_result(60f64.to_radians().cos()).unwrap());
    }

    #[test]
    fn test_multiple_calls_fold_in_place() {
        assert_eq!(fold_trig_calls("sin(90)+cos(0)"), "1+1");
        assert_eq!(fold_trig_calls("2×(sin(90)-cos(180))"), "2×(1--1)");
    }

    #[test]
    fn test_replacement_length_change_keeps_offsets() {
        // The first replacement is much longer than its call text
        let folded = fold_trig_calls("sin(30)+sin(90)");
        assert!(folded.ends_with("+1"));
        assert!(folded.starts_with("0.49999999"));
    }

    #[test]
    fn test_text_without_calls_is_unchanged() {
        assert_eq!(fold_trig_calls("3+4×2"), "3+4×2");
        assert_eq!(fold_trig_calls("sin(x)"), "sin(x)");
    }

    #[test]
    fn test_glyph_minus_argument_is_not_folded() {
        assert_eq!(fold_trig_calls("sin(−90)"), "sin(−90)");
    }

    #[test]
    fn test_nested_calls_are_not_folded() {
        // Only the innermost literal call matches
        assert_eq!(fold_trig_calls("sin(cos(0))"), "sin(1)");
    }
}
