//! Configuration types for the payroll hours engine.
//!
//! This module contains the strongly-typed configuration structures: the
//! [`RateTable`] mapping rate keys to hourly rates, and the
//! [`EngineConfig`] holding the engine constants (night window, ordinary
//! hours allotment, weekly limit, surcharge factors) that would otherwise
//! live as process-wide globals.

use std::collections::HashMap;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;

/// Identifies an hourly rate in the [`RateTable`].
///
/// The serialized names match the keys stored by the configuration table
/// of the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateKey {
    /// Base rate for ordinary hours.
    Ordinary,
    /// Rate for daytime overtime hours.
    ExtraDay,
    /// Rate for nighttime overtime hours.
    ExtraNight,
}

impl RateKey {
    /// The serialized name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateKey::Ordinary => "ordinary",
            RateKey::ExtraDay => "extra_day",
            RateKey::ExtraNight => "extra_night",
        }
    }

    fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ordinary" => Some(RateKey::Ordinary),
            "extra_day" => Some(RateKey::ExtraDay),
            "extra_night" => Some(RateKey::ExtraNight),
            _ => None,
        }
    }
}

impl std::fmt::Display for RateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hourly rates keyed by [`RateKey`].
///
/// Lookups for absent keys return `Decimal::ZERO` instead of failing, so a
/// partially-populated configuration still produces a total-correct
/// valuation.
///
/// Deserialization is lenient in two ways that match the persistence
/// layer's configuration table: values may be decimal strings or bare
/// numbers (the `Decimal` deserializer accepts both), and unrecognized
/// keys are ignored.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{RateKey, RateTable};
/// use rust_decimal::Decimal;
///
/// let table: RateTable =
///     serde_json::from_str(r#"{"ordinary": "5000", "extra_day": 6250.5}"#).unwrap();
/// assert_eq!(table.rate(RateKey::Ordinary), Decimal::new(5000, 0));
/// assert_eq!(table.rate(RateKey::ExtraNight), Decimal::ZERO); // absent
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<RateKey, Decimal>,
}

impl RateTable {
    /// Creates an empty rate table (every lookup returns zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a rate.
    pub fn with_rate(mut self, key: RateKey, rate: Decimal) -> Self {
        self.rates.insert(key, rate);
        self
    }

    /// Returns the hourly rate for a key, defaulting to zero when absent.
    pub fn rate(&self, key: RateKey) -> Decimal {
        self.rates.get(&key).copied().unwrap_or(Decimal::ZERO)
    }
}

impl<'de> Deserialize<'de> for RateTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, Decimal>::deserialize(deserializer)?;
        let mut rates = HashMap::new();
        for (name, value) in raw {
            if value < Decimal::ZERO {
                return Err(D::Error::custom(format!(
                    "rate '{name}' must be non-negative, got {value}"
                )));
            }
            if let Some(key) = RateKey::from_key_name(&name) {
                rates.insert(key, value);
            }
        }
        Ok(Self { rates })
    }
}

/// Engine constants, passed explicitly instead of read from globals.
///
/// `Default` yields the Colombian statutory values: night window
/// 21:00–06:00, 8 ordinary hours per day, 48-hour weekly limit, night
/// surcharge factor 1.35, and Sunday factor 1.75.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Start of the nightly window (inclusive).
    #[serde(default = "default_night_window_start")]
    pub night_window_start: NaiveTime,
    /// End of the nightly window (exclusive). A window whose start is
    /// later than its end wraps across midnight.
    #[serde(default = "default_night_window_end")]
    pub night_window_end: NaiveTime,
    /// Daily allotment of ordinary hours; time beyond it is overtime.
    #[serde(default = "default_ordinary_hours_per_day")]
    pub ordinary_hours_per_day: Decimal,
    /// Weekly worked-hours limit used by the weekly report alert.
    #[serde(default = "default_weekly_hours_limit")]
    pub weekly_hours_limit: Decimal,
    /// Multiplier applied to the ordinary rate for night-surcharge hours.
    #[serde(default = "default_night_surcharge_factor")]
    pub night_surcharge_factor: Decimal,
    /// Multiplier applied to the ordinary rate for Sunday hours.
    #[serde(default = "default_sunday_factor")]
    pub sunday_factor: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            night_window_start: default_night_window_start(),
            night_window_end: default_night_window_end(),
            ordinary_hours_per_day: default_ordinary_hours_per_day(),
            weekly_hours_limit: default_weekly_hours_limit(),
            night_surcharge_factor: default_night_surcharge_factor(),
            sunday_factor: default_sunday_factor(),
        }
    }
}

fn default_night_window_start() -> NaiveTime {
    NaiveTime::from_hms_opt(21, 0, 0).expect("valid time literal")
}

fn default_night_window_end() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 0, 0).expect("valid time literal")
}

fn default_ordinary_hours_per_day() -> Decimal {
    Decimal::new(8, 0)
}

fn default_weekly_hours_limit() -> Decimal {
    Decimal::new(48, 0)
}

fn default_night_surcharge_factor() -> Decimal {
    // 1.35
    Decimal::new(135, 2)
}

fn default_sunday_factor() -> Decimal {
    // 1.75
    Decimal::new(175, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_engine_config_statutory_values() {
        let config = EngineConfig::default();
        assert_eq!(
            config.night_window_start,
            NaiveTime::from_hms_opt(21, 0, 0).unwrap()
        );
        assert_eq!(
            config.night_window_end,
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
        assert_eq!(config.ordinary_hours_per_day, dec("8"));
        assert_eq!(config.weekly_hours_limit, dec("48"));
        assert_eq!(config.night_surcharge_factor, dec("1.35"));
        assert_eq!(config.sunday_factor, dec("1.75"));
    }

    #[test]
    fn test_engine_config_partial_deserialization_uses_defaults() {
        let config: EngineConfig =
            serde_yaml::from_str("ordinary_hours_per_day: 10\n").unwrap();
        assert_eq!(config.ordinary_hours_per_day, dec("10"));
        assert_eq!(config.weekly_hours_limit, dec("48"));
        assert_eq!(config.night_surcharge_factor, dec("1.35"));
    }

    #[test]
    fn test_rate_table_accepts_strings_and_numbers() {
        let table: RateTable =
            serde_json::from_str(r#"{"ordinary": "5230.50", "extra_day": 6538}"#).unwrap();
        assert_eq!(table.rate(RateKey::Ordinary), dec("5230.50"));
        assert_eq!(table.rate(RateKey::ExtraDay), dec("6538"));
    }

    #[test]
    fn test_rate_table_missing_key_defaults_to_zero() {
        let table: RateTable = serde_json::from_str(r#"{"ordinary": "5000"}"#).unwrap();
        assert_eq!(table.rate(RateKey::ExtraNight), Decimal::ZERO);
    }

    #[test]
    fn test_rate_table_ignores_unknown_keys() {
        let table: RateTable =
            serde_json::from_str(r#"{"ordinary": "5000", "transport_subsidy": "120000"}"#)
                .unwrap();
        assert_eq!(table.rate(RateKey::Ordinary), dec("5000"));
    }

    #[test]
    fn test_rate_table_rejects_negative_rate() {
        let result: Result<RateTable, _> = serde_json::from_str(r#"{"ordinary": "-1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_table_builder() {
        let table = RateTable::new()
            .with_rate(RateKey::Ordinary, dec("5000"))
            .with_rate(RateKey::ExtraDay, dec("6250"));
        assert_eq!(table.rate(RateKey::Ordinary), dec("5000"));
        assert_eq!(table.rate(RateKey::ExtraDay), dec("6250"));
        assert_eq!(table.rate(RateKey::ExtraNight), Decimal::ZERO);
    }

    #[test]
    fn test_rate_key_names() {
        assert_eq!(RateKey::Ordinary.to_string(), "ordinary");
        assert_eq!(RateKey::ExtraDay.to_string(), "extra_day");
        assert_eq!(RateKey::ExtraNight.to_string(), "extra_night");
    }
}
