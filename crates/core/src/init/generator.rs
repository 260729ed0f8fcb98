//! Generation of `.stepform/config.toml` from the embedded template.

use super::error::{InitError, InitResult};
use super::templates::get_template;
use crate::config::{CONFIG_DIR, CONFIG_FILE};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Options for initializing a `.stepform` directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory in which `.stepform/` will be created.
    pub target_dir: PathBuf,

    /// Overwrite an existing config file.
    pub force: bool,
}

/// Write `.stepform/config.toml` with every setting at its default.
///
/// # Returns
/// The path of the written file.
///
/// # Errors
/// - [`InitError::AlreadyExists`] if the file exists and `force` is unset
/// - [`InitError::TemplateNotFound`] if the template was not embedded
/// - I/O failures creating the directory or writing the file
pub fn generate_config_dir(options: &InitOptions) -> InitResult<PathBuf> {
    let dir = options.target_dir.join(CONFIG_DIR);
    let target_path = dir.join(CONFIG_FILE);

    if target_path.exists() && !options.force {
        return Err(InitError::AlreadyExists(target_path));
    }

    let content = get_template(CONFIG_FILE)
        .ok_or_else(|| InitError::TemplateNotFound(CONFIG_FILE.to_string()))?;

    fs::create_dir_all(&dir).map_err(|source| InitError::DirectoryCreate {
        path: dir.clone(),
        source,
    })?;

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    info!(path = %target_path.display(), "wrote config template");
    Ok(target_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::load_config;
    use sf_protocol::GlobalConfig;
    use tempfile::tempdir;

    #[test]
    fn test_generate_writes_loadable_defaults() {
        let dir = tempdir().unwrap();
        let options = InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: false,
        };

        let written = generate_config_dir(&options).expect("init should succeed");
        assert!(written.ends_with(".stepform/config.toml"));

        // The template must describe exactly the defaults
        let config = load_config(dir.path()).expect("template should parse");
        assert_eq!(config.global, GlobalConfig::default());
    }

    #[test]
    fn test_generate_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let options = InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: false,
        };

        generate_config_dir(&options).unwrap();
        let result = generate_config_dir(&options);
        assert!(matches!(result, Err(InitError::AlreadyExists(_))));
    }

    #[test]
    fn test_generate_force_overwrites() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_DIR).join(CONFIG_FILE);
        fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        fs::write(&config_path, "title = \"old\"\n").unwrap();

        let options = InitOptions {
            target_dir: dir.path().to_path_buf(),
            force: true,
        };
        generate_config_dir(&options).expect("force should overwrite");

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("title = \"Form Validations\""));
    }
}
