//! Domain-specific error types for calcdgtl.
//!
//! Evaluation failures are kept apart from configuration and session errors
//! so the caller can always tell a bad expression from a bad environment.

use serde::Serialize;
use thiserror::Error;

/// Errors produced while evaluating a normalized expression.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum EvalError {
    /// Nothing left to evaluate.
    #[error("Empty expression")]
    Empty,

    /// A character outside the arithmetic alphabet.
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    /// A numeric literal that does not parse as `f64`.
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    /// Opening and closing parentheses do not pair up.
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    /// An operator without an operand, or two operands without an operator.
    #[error("Missing operand")]
    MissingOperand,

    /// The arithmetic was valid but the value is infinite or NaN.
    #[error("Result is not a finite number ({0})")]
    NonFinite(f64),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// Failed to serialize the config.
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[source] toml::ser::Error),

    /// Failed to save the config file.
    #[error("Failed to save config: {0}")]
    SaveFailed(#[source] std::io::Error),
}

/// Keypad session errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The label does not name any calculator key.
    #[error("Unknown key '{0}'")]
    UnknownKey(String),
}
