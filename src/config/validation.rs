//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// The error text has to stay distinguishable from a result, so it may not
/// be empty and may not read as a number.
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];
    let error_text = config.error_text.trim();

    if error_text.is_empty() {
        warnings.push(ValidationWarning {
            field: "error_text".to_string(),
            message: "Error text is empty. Failures will be indistinguishable from blank input."
                .to_string(),
        });
    } else if error_text.replace(',', "").parse::<f64>().is_ok() {
        warnings.push(ValidationWarning {
            field: "error_text".to_string(),
            message: format!(
                "Error text '{}' looks like a number. Failures will be mistaken for results.",
                config.error_text
            ),
        });
    }

    if config.error_text.chars().count() > 20 {
        warnings.push(ValidationWarning {
            field: "error_text".to_string(),
            message: format!(
                "Error text '{}' is quite long for a calculator display.",
                config.error_text
            ),
        });
    }

    warnings
}
