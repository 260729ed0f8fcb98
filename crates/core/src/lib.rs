//! # sf-core
//!
//! Form logic for stepform.
//!
//! This crate provides:
//! - The declarative validation schema
//! - Field bindings, the two-step controller and the submission sink
//! - The form engine that applies `Op`s and reports `Event`s
//! - Configuration loading and `.stepform/` initialization
//!
//! ## Modules
//!
//! - [`schema`]: Field rules and validation
//! - [`state`]: Field bindings, step controller, submission sink
//! - [`engine`]: The synchronous form engine
//! - [`record`]: Draft to record conversion
//! - [`config`]: Configuration loading
//! - [`init`]: Config directory scaffolding

pub mod config;
pub mod engine;
pub mod error;
pub mod init;
pub mod record;
pub mod schema;
pub mod state;

pub use engine::FormEngine;
pub use error::{RecordError, RecordResult};
pub use schema::FormSchema;
