//! Errors raised by `stepform init`.

use std::path::PathBuf;
use thiserror::Error;

pub type InitResult<T> = Result<T, InitError>;

#[derive(Debug, Error)]
pub enum InitError {
    /// The config file exists and `force` was not set.
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// The named template was not embedded at build time.
    #[error("template {0} is missing from the build")]
    TemplateNotFound(String),

    #[error("cannot create {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
