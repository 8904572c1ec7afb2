//! Calculator module for evaluating keypad expressions.
//!
//! Each evaluation is one pass through pure stages:
//! - `parenthesize`: `sin90` -> `sin(90)`
//! - `trig`: `sin(90)` -> `1` (degrees)
//! - `normalize`: glyphs to ASCII, integers to `n.0`
//! - `evaluation`: arithmetic on the normalized string
//! - `format`: value back to a display string

mod detection;
mod evaluation;
mod format;
mod normalize;
mod parenthesize;
mod trig;

pub use detection::{has_trig_function, is_calculator_input};
pub use evaluation::evaluate_arithmetic;
pub use format::{ZERO_THRESHOLD, format_number, format_result, group_digits};
pub use normalize::{coerce_floats, normalize, substitute_glyphs};
pub use parenthesize::insert_missing_parentheses;
pub use trig::{TrigFn, fold_trig_calls};

use serde::Serialize;

use crate::error::EvalError;

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CalcResult {
    /// The expression evaluated to a finite number.
    Success {
        /// The original expression.
        expression: String,
        /// The expression after all text rewriting, as seen by the evaluator.
        normalized: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display.
        display_result: String,
    },
    /// The expression is malformed or its value is not finite.
    Error {
        /// The original expression.
        expression: String,
        /// Why evaluation failed.
        error: EvalError,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The numeric value, for successful results only.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// The error, for failed results only.
    pub fn error(&self) -> Option<&EvalError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> String {
        match self {
            Self::Success { display_result, .. } => display_result.clone(),
            Self::Error { error, .. } => error.to_string(),
        }
    }
}

/// Run the text rewriting stages, producing the evaluator's input.
pub fn prepare_expression(raw: &str) -> String {
    let folded = if has_trig_function(raw) {
        fold_trig_calls(&insert_missing_parentheses(raw))
    } else {
        raw.to_string()
    };
    normalize(&folded)
}

/// Evaluate a raw keypad expression.
pub fn evaluate(raw: &str) -> CalcResult {
    let expression = raw.trim().to_string();
    let normalized = prepare_expression(&expression);

    let outcome =
        evaluate_arithmetic(&normalized).and_then(|value| Ok((value, format_result(value)?)));

    match outcome {
        Ok((value, display_result)) => CalcResult::Success {
            expression,
            normalized,
            value,
            display_result,
        },
        Err(error) => {
            tracing::debug!("Evaluation of {:?} failed: {}", expression, error);
            CalcResult::Error { expression, error }
        }
    }
}

/// Evaluate and return `(display, ok)`.
///
/// On failure the display string is the error message and `ok` is `false`.
pub fn evaluate_display(raw: &str) -> (String, bool) {
    let result = evaluate(raw);
    (result.display(), result.is_success())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_of(raw: &str) -> String {
        let result = evaluate(raw);
        assert!(result.is_success(), "{:?} failed: {:?}", raw, result);
        result.display()
    }

    #[test]
    fn test_plain_literals_pass_through() {
        for literal in ["0", "7", "42", "1.5", "0.25", "123456789", "-3", "2.75"] {
            let value: f64 = literal.parse().unwrap();
            assert_eq!(display_of(literal), format_number(value));
        }
    }

    #[test]
    fn test_sin_shorthand() {
        assert_eq!(display_of("sin90"), "1");
    }

    #[test]
    fn test_cos_near_zero() {
        assert_eq!(display_of("cos90"), "0");
    }

    #[test]
    fn test_glyph_precedence() {
        let result = evaluate("3+4×2");
        match result {
            CalcResult::Success {
                normalized,
                value,
                display_result,
                ..
            } => {
                assert_eq!(normalized, "3.0+4.0*2.0");
                assert_eq!(value, 11.0);
                assert_eq!(display_result, "11");
            }
            _ => panic!("Expected Success"),
        }
    }

    #[test]
    fn test_division_by_zero_fails() {
        let result = evaluate("10÷0");
        assert!(!result.is_success());
        assert!(matches!(result.error(), Some(EvalError::NonFinite(_))));
        assert_ne!(result.display(), "0");
        assert_ne!(result.display(), "inf");
    }

    #[test]
    fn test_unbalanced_parenthesis_fails() {
        let result = evaluate("(1+2");
        assert_eq!(result.error(), Some(&EvalError::UnbalancedParentheses));
        assert_eq!(result.value(), None);
    }

    #[test]
    fn test_several_trig_calls() {
        assert_eq!(display_of("sin90+cos0"), "2");
        assert_eq!(display_of("sin(90)×cos(0)−tan(45)"), "0");
        assert_eq!(display_of("5-sin-90"), "6");
    }

    #[test]
    fn test_mixed_expression() {
        assert_eq!(display_of("1÷4"), "0.25");
        assert_eq!(display_of("7÷2×2"), "7");
        assert_eq!(display_of("0.1+0.2"), "0.30000000000000004");
    }

    #[test]
    fn test_nested_trig_is_rejected() {
        let result = evaluate("sin(cos(0))");
        assert!(matches!(
            result.error(),
            Some(EvalError::UnexpectedCharacter { ch: 's', .. })
        ));
    }

    #[test]
    fn test_glyph_minus_trig_argument_is_rejected() {
        let result = evaluate("sin−90");
        assert!(matches!(
            result.error(),
            Some(EvalError::UnexpectedCharacter { ch: 's', .. })
        ));
    }

    #[test]
    fn test_trailing_operator_and_empty_input() {
        assert_eq!(evaluate("1+").error(), Some(&EvalError::MissingOperand));
        assert_eq!(evaluate("").error(), Some(&EvalError::Empty));
    }

    #[test]
    fn test_evaluate_display() {
        assert_eq!(evaluate_display("2×3"), ("6".to_string(), true));
        let (display, ok) = evaluate_display("1÷0");
        assert!(!ok);
        assert!(display.contains("not a finite number"));
    }

    #[test]
    fn test_expression_is_kept() {
        assert_eq!(evaluate(" 2+2 ").expression(), "2+2");
    }

    #[test]
    fn test_result_serializes_with_status() {
        let json = serde_json::to_value(evaluate("2+2")).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["display_result"], "4");

        let json = serde_json::to_value(evaluate("(")).unwrap();
        assert_eq!(json["status"], "error");
    }
}
