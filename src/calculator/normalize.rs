//! Operator glyph substitution and float coercion.

use lazy_static::lazy_static;
use regex::Regex;

/// Keypad glyphs and their ASCII operators.
const GLYPHS: &[(char, char)] = &[('×', '*'), ('÷', '/'), ('−', '-')];

lazy_static! {
    /// A signed or unsigned decimal literal.
    static ref NUMBER_TOKEN: Result<Regex, regex::Error> =
        Regex::new(r"[-+]?(\d+\.\d*|\.\d+|\d+)");
}

/// Replace the keypad's multiplication, division and minus glyphs with ASCII.
pub fn substitute_glyphs(expr: &str) -> String {
    expr.chars()
        .map(|c| {
            GLYPHS
                .iter()
                .find(|(glyph, _)| *glyph == c)
                .map(|(_, ascii)| *ascii)
                .unwrap_or(c)
        })
        .collect()
}

/// Give every integer literal an explicit `.0`.
///
/// Literals that already contain a decimal point, and all text between
/// literals, are copied through unchanged and in order.
pub fn coerce_floats(expr: &str) -> String {
    let regex = match &*NUMBER_TOKEN {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!("Number pattern unavailable, skipping float coercion: {}", e);
            return expr.to_string();
        }
    };

    let mut out = String::with_capacity(expr.len() + 8);
    let mut last = 0;
    for token in regex.find_iter(expr) {
        out.push_str(&expr[last..token.start()]);
        out.push_str(token.as_str());
        if !token.as_str().contains('.') {
            out.push_str(".0");
        }
        last = token.end();
    }
    out.push_str(&expr[last..]);
    out
}

/// Glyph substitution followed by float coercion.
pub fn normalize(expr: &str) -> String {
    let normalized = coerce_floats(&substitute_glyphs(expr));
    tracing::debug!("Normalized {:?} -> {:?}", expr, normalized);
    normalized
}
