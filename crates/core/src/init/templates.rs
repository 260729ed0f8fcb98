//! Embedded template files for `.stepform/` initialization.
//!
//! This module uses `rust-embed` to embed the workspace `templates/`
//! directory into the binary at compile time, so `stepform init` works
//! without any files next to the executable.

use rust_embed::RustEmbed;

/// Embedded template files from the workspace `templates/` directory.
///
/// `CARGO_MANIFEST_DIR` is `crates/core`, so the folder is two levels up.
/// With the `debug-embed` feature the files are embedded in debug builds as
/// well.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Example
/// ```
/// use sf_core::init::templates::get_template;
///
/// let config = get_template("config.toml").expect("config.toml should exist");
/// assert!(config.contains("validation_mode ="));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}
