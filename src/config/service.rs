//! Configuration loading, caching and saving.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::ConfigError;

use super::types::AppConfig;
use super::validation::validate_config;

/// Global config instance, `None` until [`init_config`] or [`set_config`] runs.
static CONFIG: RwLock<Option<AppConfig>> = RwLock::new(None);

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("calcdgtl"))
}

/// Path of the config file, `~/.config/calcdgtl/config.toml` on Linux.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Load a config file from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str::<AppConfig>(&content).map_err(ConfigError::ParseFailed)
}

/// Load application config from the user config directory.
///
/// Returns `None` if the file doesn't exist.
/// Logs a warning and returns `None` if it can't be read or parsed.
pub fn load_app_config() -> Option<AppConfig> {
    let config_path = config_path().ok()?;

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return None;
    }

    match load_config_from(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({:?}), using defaults", e, config_path);
            None
        }
    }
}

/// Initialize config from file (call once at startup).
///
/// Validation warnings are logged, never fatal.
pub fn init_config() {
    let loaded = load_app_config().unwrap_or_default();

    for warning in validate_config(&loaded) {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    set_config(loaded);
}

/// Replace the cached config.
pub fn set_config(config: AppConfig) {
    let mut cached = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    *cached = Some(config);
}

/// Get a clone of the current config.
///
/// Before [`init_config`] runs this is the built-in default.
pub fn config() -> AppConfig {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_default()
}

/// Save config to an explicit path, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(ConfigError::SaveFailed)?;
    }

    let content = toml::to_string_pretty(config).map_err(ConfigError::SerializeFailed)?;
    std::fs::write(path, content).map_err(ConfigError::SaveFailed)?;
    tracing::debug!("Saved config to {:?}", path);
    Ok(())
}

/// Save config to the user config file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path()?)
}
