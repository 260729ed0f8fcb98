//! In-memory form state.
//!
//! This module provides:
//! - Field bindings (values, errors, touched fields)
//! - The two-step controller
//! - The append-only submission sink

pub mod fields;
pub mod sink;
pub mod step;

pub use fields::FieldBindings;
pub use sink::SubmissionSink;
pub use step::{StepController, Transition};
