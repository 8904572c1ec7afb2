//! Keypad session state.
//!
//! Holds the two strings a calculator front end shows (the current display
//! and the last evaluated expression) and updates them one key press at a
//! time. Evaluation itself is delegated to [`crate::calculator::evaluate`].

use std::fmt;
use std::str::FromStr;

use crate::calculator::evaluate;
use crate::config::AppConfig;
use crate::error::SessionError;

/// A key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcButton {
    Clear,
    Sin,
    Cos,
    Tan,
    Seven,
    Eight,
    Nine,
    Divide,
    Four,
    Five,
    Six,
    Multiply,
    One,
    Two,
    Three,
    Subtract,
    Zero,
    Decimal,
    Equal,
    Add,
}

impl CalcButton {
    /// All keys in keypad order, row by row.
    pub const ALL: [CalcButton; 20] = [
        CalcButton::Sin,
        CalcButton::Cos,
        CalcButton::Tan,
        CalcButton::Divide,
        CalcButton::Seven,
        CalcButton::Eight,
        CalcButton::Nine,
        CalcButton::Multiply,
        CalcButton::Four,
        CalcButton::Five,
        CalcButton::Six,
        CalcButton::Subtract,
        CalcButton::One,
        CalcButton::Two,
        CalcButton::Three,
        CalcButton::Add,
        CalcButton::Clear,
        CalcButton::Zero,
        CalcButton::Decimal,
        CalcButton::Equal,
    ];

    /// The text printed on the key, which is also what it appends.
    pub fn label(self) -> &'static str {
        match self {
            CalcButton::Clear => "AC",
            CalcButton::Sin => "sin",
            CalcButton::Cos => "cos",
            CalcButton::Tan => "tan",
            CalcButton::Seven => "7",
            CalcButton::Eight => "8",
            CalcButton::Nine => "9",
            CalcButton::Divide => "÷",
            CalcButton::Four => "4",
            CalcButton::Five => "5",
            CalcButton::Six => "6",
            CalcButton::Multiply => "×",
            CalcButton::One => "1",
            CalcButton::Two => "2",
            CalcButton::Three => "3",
            CalcButton::Subtract => "-",
            CalcButton::Zero => "0",
            CalcButton::Decimal => ".",
            CalcButton::Equal => "=",
            CalcButton::Add => "+",
        }
    }
}

impl fmt::Display for CalcButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalcButton {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // ASCII aliases for the glyph keys
        let label = match s {
            "*" => "×",
            "/" => "÷",
            "−" => "-",
            other => other,
        };
        CalcButton::ALL
            .into_iter()
            .find(|button| button.label() == label)
            .ok_or_else(|| SessionError::UnknownKey(s.to_string()))
    }
}

/// Display and history state driven by key presses.
#[derive(Debug, Clone)]
pub struct Session {
    display: String,
    history: String,
    error_text: String,
    showing_error: bool,
}

impl Session {
    /// Create a session that shows `error_text` when evaluation fails.
    pub fn new(error_text: impl Into<String>) -> Self {
        Self {
            display: "0".to_string(),
            history: String::new(),
            error_text: error_text.into(),
            showing_error: false,
        }
    }

    /// Create a session using the configured error text.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.error_text.clone())
    }

    /// The current display string.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The last evaluated expression, or empty.
    pub fn history(&self) -> &str {
        &self.history
    }

    /// The history line as a front end should show it.
    ///
    /// Hidden when empty or when it is just the initial `"0"`.
    pub fn visible_history(&self) -> Option<&str> {
        if self.history.is_empty() || self.history == "0" {
            None
        } else {
            Some(&self.history)
        }
    }

    /// Whether the display currently shows an evaluation failure.
    pub fn is_error(&self) -> bool {
        self.showing_error
    }

    /// Apply one key press.
    pub fn press(&mut self, button: CalcButton) {
        match button {
            CalcButton::Clear => {
                self.display = "0".to_string();
                self.history.clear();
                self.showing_error = false;
            }
            // nothing to evaluate while the error text is showing
            CalcButton::Equal if self.showing_error => {}
            CalcButton::Equal => self.evaluate(),
            CalcButton::Decimal => {
                if self.showing_error {
                    self.reset_display();
                }
                if !self.display.contains('.') {
                    self.display.push('.');
                }
            }
            other => {
                if self.showing_error {
                    self.reset_display();
                }
                if self.display == "0" {
                    self.display = other.label().to_string();
                } else {
                    self.display.push_str(other.label());
                }
            }
        }
    }

    /// Apply a key press given by its label.
    pub fn press_label(&mut self, label: &str) -> Result<(), SessionError> {
        let button = label.parse::<CalcButton>()?;
        self.press(button);
        Ok(())
    }

    fn evaluate(&mut self) {
        self.history = self.display.clone();
        let result = evaluate(&self.display);

        if result.is_success() {
            self.display = result.display();
            self.showing_error = false;
        } else {
            tracing::debug!("Session evaluation failed: {}", result.display());
            self.display = self.error_text.clone();
            self.showing_error = true;
        }
    }

    fn reset_display(&mut self) {
        self.display = "0".to_string();
        self.showing_error = false;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(session: &mut Session, labels: &[&str]) {
        for label in labels {
            session.press_label(label).unwrap();
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for button in CalcButton::ALL {
            assert_eq!(button.label().parse::<CalcButton>(), Ok(button));
        }
        assert_eq!("*".parse::<CalcButton>(), Ok(CalcButton::Multiply));
        assert_eq!(
            "sqrt".parse::<CalcButton>(),
            Err(SessionError::UnknownKey("sqrt".to_string()))
        );
    }

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(session.display(), "0");
        assert_eq!(session.history(), "");
        assert_eq!(session.visible_history(), None);
    }

    #[test]
    fn test_first_digit_replaces_zero() {
        let mut session = Session::default();
        press_all(&mut session, &["7", "8"]);
        assert_eq!(session.display(), "78");
    }

    #[test]
    fn test_evaluate_moves_expression_to_history() {
        let mut session = Session::default();
        press_all(&mut session, &["3", "+", "4", "×", "2", "="]);
        assert_eq!(session.display(), "11");
        assert_eq!(session.visible_history(), Some("3+4×2"));
    }

    #[test]
    fn test_trig_keys() {
        let mut session = Session::default();
        press_all(&mut session, &["sin", "9", "0", "="]);
        assert_eq!(session.display(), "1");
        assert_eq!(session.history(), "sin90");
    }

    #[test]
    fn test_decimal_only_once() {
        let mut session = Session::default();
        press_all(&mut session, &["1", ".", "5", "."]);
        assert_eq!(session.display(), "1.5");

        let mut session = Session::default();
        session.press(CalcButton::Decimal);
        assert_eq!(session.display(), "0.");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = Session::default();
        press_all(&mut session, &["2", "=", "AC"]);
        assert_eq!(session.display(), "0");
        assert_eq!(session.history(), "");
    }

    #[test]
    fn test_result_can_be_extended() {
        let mut session = Session::default();
        press_all(&mut session, &["2", "×", "3", "=", "+", "1", "="]);
        assert_eq!(session.display(), "7");
        assert_eq!(session.history(), "6+1");
    }

    #[test]
    fn test_failure_shows_error_text() {
        let mut session = Session::new("Error");
        press_all(&mut session, &["1", "÷", "0", "="]);
        assert_eq!(session.display(), "Error");
        assert!(session.is_error());
        assert_eq!(session.history(), "1÷0");

        // next key starts over instead of appending to the error text
        session.press(CalcButton::Five);
        assert_eq!(session.display(), "5");
        assert!(!session.is_error());
    }

    #[test]
    fn test_repeated_equal_keeps_failed_expression() {
        let mut session = Session::new("Error");
        press_all(&mut session, &["1", "÷", "0", "=", "="]);
        assert_eq!(session.display(), "Error");
        assert_eq!(session.history(), "1÷0");
        assert!(session.is_error());
    }

    #[test]
    fn test_zero_history_is_hidden() {
        let mut session = Session::default();
        session.press(CalcButton::Equal);
        assert_eq!(session.history(), "0");
        assert_eq!(session.visible_history(), None);
    }
}
