//! Configuration file loader for the `.stepform/` directory.
//!
//! Only one file is read, `.stepform/config.toml`. Every setting has a
//! default, so a missing directory, a missing file or an empty file all
//! yield a usable configuration.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use crate::config::{CONFIG_DIR, CONFIG_FILE};
use sf_protocol::config_models::GlobalConfig;
use std::path::Path;
use tracing::{debug, info};

/// Loads configuration from `root/.stepform/config.toml`.
///
/// # Arguments
///
/// * `root` - Directory containing the `.stepform/` folder
///
/// # Returns
///
/// An `AppConfig` with the parsed settings. If the directory or file is
/// missing, returns the default configuration rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The file exists but cannot be read
/// - The file is not valid TOML or has wrongly typed values
/// - A value is outside what the form accepts (e.g. an empty title)
pub fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);

    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let global: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.clone(),
            source,
        })?;

    if global.title.trim().is_empty() {
        return Err(ConfigError::InvalidConfig {
            path: config_path,
            reason: "title must not be empty".to_string(),
        });
    }

    info!(path = %config_path.display(), mode = ?global.validation_mode, "loaded config");

    Ok(AppConfig {
        global,
        source: Some(config_path),
    })
}
