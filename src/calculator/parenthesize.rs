//! Implicit parenthesis insertion for trig shorthand.
//!
//! The keypad lets users type `sin90` without parentheses. This stage turns
//! every such shorthand into an explicit call (`sin(90)`) so the trig folder
//! only has to recognise one shape.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A trig name immediately followed by a signed decimal literal.
    /// A name followed by `(` can't match, so existing calls are left alone.
    static ref TRIG_SHORTHAND: Result<Regex, regex::Error> =
        Regex::new(r"(sin|cos|tan)(-?\d+(?:\.\d+)?)");
}

/// Rewrite `name<literal>` into `name(<literal>)` for `sin`, `cos` and `tan`.
///
/// Matches are non-overlapping and taken left to right. If the pattern
/// failed to build, the input is returned unchanged.
pub fn insert_missing_parentheses(expr: &str) -> String {
    let regex = match &*TRIG_SHORTHAND {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!("Trig shorthand pattern unavailable, skipping: {}", e);
            return expr.to_string();
        }
    };

    let rewritten = regex.replace_all(expr, "$1($2)");
    if rewritten != expr {
        tracing::debug!("Inserted parentheses: {:?} -> {:?}", expr, rewritten);
    }
    rewritten.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_gets_parentheses() {
        assert_eq!(insert_missing_parentheses("sin90"), "sin(90)");
        assert_eq!(insert_missing_parentheses("cos-45.5"), "cos(-45.5)");
        assert_eq!(insert_missing_parentheses("tan0"), "tan(0)");
    }

    #[test]
    fn test_existing_calls_untouched() {
        assert_eq!(insert_missing_parentheses("sin(90)"), "sin(90)");
        assert_eq!(insert_missing_parentheses("cos(-1)+1"), "cos(-1)+1");
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(
            insert_missing_parentheses("sin90+cos0×tan45"),
            "sin(90)+cos(0)×tan(45)"
        );
    }

    #[test]
    fn test_no_match_returns_input() {
        assert_eq!(insert_missing_parentheses("3+4×2"), "3+4×2");
        assert_eq!(insert_missing_parentheses("sin"), "sin");
        assert_eq!(insert_missing_parentheses("sin-"), "sin-");
    }

    #[test]
    fn test_partial_fraction_stops_at_dot() {
        // `90.` has no digits after the dot, so only `90` is wrapped
        assert_eq!(insert_missing_parentheses("sin90."), "sin(90).");
    }
}
