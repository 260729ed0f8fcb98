//! Configuration loading and management.
//!
//! This module loads the optional `.stepform/config.toml` file.

pub mod error;
pub mod loader;
pub mod models;

/// Name of the directory holding stepform's configuration.
pub const CONFIG_DIR: &str = ".stepform";

/// Name of the configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";
