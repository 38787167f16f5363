//! Common test utilities for deploy-assets CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with a fake `npx` on its PATH
//! - Assertion macros: `assert_built!`, `assert_output_contains!`, etc.
//! - Fixtures: Reusable config and source constants

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
