//! Configuration for the payroll hours engine.
//!
//! This module provides the typed engine constants and rate table, plus a
//! YAML loader for reading both from a settings file.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, RateKey, RateTable};
