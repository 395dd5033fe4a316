//! Common test utilities
//!
//! This module provides shared infrastructure for integration tests.

pub mod test_helpers;

#[allow(unused_imports)]
pub use test_helpers::{acetic_acid, phosphate_like, relative_error};
