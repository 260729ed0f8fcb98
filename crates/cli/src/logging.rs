//! Subscriber setup for the `stepform` binary.
//!
//! The filter comes from `STEPFORM_LOG` using `EnvFilter` directive syntax
//! (e.g. `debug` or `sf_core=trace`). While the TUI owns the terminal, logs
//! must not reach stdout or stderr, so they go to a file or nowhere.

use color_eyre::eyre::{eyre, WrapErr};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STEPFORM_LOG";

const DEFAULT_FILTER: &str = "info";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file, creating it if needed.
    File(PathBuf),
    /// Install no subscriber; events are dropped.
    Discard,
}

impl LogTarget {
    /// Target for an interactive session: the log file if one was given.
    pub fn for_tui(log_file: Option<PathBuf>) -> Self {
        log_file.map_or(LogTarget::Discard, LogTarget::File)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber for `target`.
pub fn init(target: LogTarget) -> color_eyre::Result<()> {
    let installed = match target {
        LogTarget::Discard => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    installed.map_err(|e| eyre!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_target_defaults_to_discard() {
        assert_eq!(LogTarget::for_tui(None), LogTarget::Discard);
        assert_eq!(
            LogTarget::for_tui(Some(PathBuf::from("form.log"))),
            LogTarget::File(PathBuf::from("form.log"))
        );
    }
}
