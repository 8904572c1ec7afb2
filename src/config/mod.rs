//! Configuration module.
//!
//! Settings live in `config.toml` under the user config directory. A missing
//! or broken file falls back to defaults.

mod service;
mod types;
mod validation;

pub use service::{
    config, config_dir, config_path, init_config, load_app_config, load_config_from, save_config,
    save_config_to, set_config,
};
pub use types::AppConfig;
pub use validation::{ValidationWarning, validate_config};
