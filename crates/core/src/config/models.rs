//! Loaded configuration.

use sf_protocol::config_models::GlobalConfig;
use std::path::PathBuf;

/// Settings plus where they came from.
///
/// # Example
///
/// ```rust,no_run
/// use sf_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."))?;
/// println!("Validation mode: {:?}", config.global.validation_mode);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Settings from `config.toml`, or defaults.
    pub global: GlobalConfig,

    /// The file the settings were read from; `None` when defaults are used.
    pub source: Option<PathBuf>,
}
