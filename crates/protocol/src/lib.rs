//! # sf-protocol
//!
//! Shared data models for stepform.
//!
//! This crate defines every structure that crosses a crate boundary:
//! - The form's fields, steps, drafts and records
//! - Configuration file parsing (`.stepform/config.toml`)
//! - Operations and events exchanged with the form engine
//!
//! ## Modules
//!
//! - [`form_models`]: Fields, steps, drafts, records and submissions
//! - [`config_models`]: Settings from config.toml
//! - [`ipc`]: Operations and Events for front end ↔ engine communication
//!
//! ## Design Principles
//!
//! - Minimal dependencies: serde, ts-rs, uuid and chrono
//! - TypeScript generation: all types derive `TS` for web clients
//! - Independent compilation: no dependencies on other stepform crates

pub mod config_models;
pub mod form_models;
pub mod ipc;

// Re-export all public types for convenience
pub use config_models::*;
pub use form_models::*;
pub use ipc::*;
