mod commands;
mod logging;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};
use logging::LogTarget;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "stepform",
    version,
    about = "Two-step personal and address form for the terminal"
)]
struct Cli {
    /// Directory containing `.stepform/` [default: current directory]
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write logs to this file while the form is open
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a JSON draft and print the record it produces
    Check {
        /// JSON file to read, or `-` for stdin
        input: String,

        /// Print a machine-readable report
        #[arg(long)]
        json: bool,
    },
    /// Print every field with its step, label and rules
    Schema {
        /// Print the schema as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write `.stepform/config.toml` with default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,

        /// Directory to create `.stepform/` in [default: current directory]
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        // When `stepform` is called without a subcommand, launch the TUI
        None => {
            logging::init(LogTarget::for_tui(cli.log_file))?;

            let root = match cli.config_dir {
                Some(dir) => dir,
                None => std::env::current_dir().wrap_err("cannot read current directory")?,
            };
            let config = sf_core::config::loader::load_config(&root)?;

            sf_tui::run_app(&config.global).await.map_err(|e| eyre!(e))?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Check { input, json }) => {
            logging::init(LogTarget::Stderr)?;
            commands::check(&input, json)
        }
        Some(Commands::Schema { json }) => {
            logging::init(LogTarget::Stderr)?;
            commands::schema(json)
        }
        Some(Commands::Init { force, dir }) => {
            logging::init(LogTarget::Stderr)?;
            commands::init(dir, force)
        }
    }
}
