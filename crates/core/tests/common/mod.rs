//! Common test utilities for form engine integration tests.
//!
//! This module provides shared functionality across the tests:
//! - Fixtures (valid drafts, pre-filled engines)
//! - Event assertions

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use fixtures::*;
