//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Text shown in place of a result when evaluation fails.
    pub error_text: String,
    /// Add thousands separators to printed results.
    pub group_digits: bool,
    /// Print the evaluated expression above the result.
    pub show_history: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            error_text: "Error".to_string(),
            group_digits: false,
            show_history: true,
        }
    }
}
