//! Initialization of a `.stepform/` configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use sf_core::init::{generate_config_dir, InitOptions};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//! };
//!
//! let written = generate_config_dir(&options)?;
//! println!("Wrote {}", written.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_config_dir, InitOptions};
pub use templates::get_template;
