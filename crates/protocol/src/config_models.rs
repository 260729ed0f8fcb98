//! Global configuration models for `.stepform/config.toml`.
//!
//! This module defines the structure of the optional configuration file that
//! controls how the form presents itself and when it shows errors.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// When field errors become visible.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Show a field's error as soon as the field is edited.
    #[default]
    OnChange,

    /// Show errors only after a next/submit attempt; fields shown that way
    /// are revalidated on every later change.
    OnSubmit,
}

/// Represents settings from `.stepform/config.toml`.
///
/// # Example
///
/// ```toml
/// # .stepform/config.toml
/// title = "Form Validations"
/// validation_mode = "on-submit"
/// show_submissions = true
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct GlobalConfig {
    /// Title shown in the frame around the form.
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub validation_mode: ValidationMode,

    /// Render the table of submitted records below the form.
    #[serde(default = "default_show_submissions")]
    pub show_submissions: bool,
}

fn default_title() -> String {
    "Form Validations".to_string()
}

fn default_show_submissions() -> bool {
    true
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            validation_mode: ValidationMode::default(),
            show_submissions: default_show_submissions(),
        }
    }
}
