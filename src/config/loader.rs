//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings (engine constants plus a rate table) from a YAML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, RateTable};

/// The settings file structure.
///
/// Both sections are optional; an empty file yields the statutory engine
/// defaults and an all-zero rate table.
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    engine: EngineConfig,
    #[serde(default)]
    rates: RateTable,
}

/// Loads and provides access to the engine settings.
///
/// # File Structure
///
/// ```text
/// config/engine.yaml
/// ├── engine:   # optional engine constants (night window, limits, factors)
/// └── rates:    # optional hourly rates (ordinary, extra_day, extra_night)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::{ConfigLoader, RateKey};
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// let hourly = loader.rates().rate(RateKey::Ordinary);
/// println!("Ordinary hourly rate: {hourly}");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    engine: EngineConfig,
    rates: RateTable,
}

impl ConfigLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] when the file cannot be read
    /// - [`EngineError::ConfigParseError`] when it contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: SettingsFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self {
            engine: settings.engine,
            rates: settings.rates,
        })
    }

    /// Returns the engine constants.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}
