//! Punch model and related types.
//!
//! This module defines the [`Punch`] and [`PunchKind`] types representing
//! raw clock-in/clock-out records, plus [`DayPunches`] for grouping the
//! punches of one employee on one calendar date.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of a clock punch.
///
/// Punch records arrive from the attendance terminals with the literal
/// strings `"ENTRADA"` (clock-in) and `"SALIDA"` (clock-out), which is the
/// serialized form of this enum.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PunchKind;
///
/// let json = serde_json::to_string(&PunchKind::Entrada).unwrap();
/// assert_eq!(json, "\"ENTRADA\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchKind {
    /// A clock-in record.
    Entrada,
    /// A clock-out record.
    Salida,
}

impl std::fmt::Display for PunchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunchKind::Entrada => write!(f, "ENTRADA"),
            PunchKind::Salida => write!(f, "SALIDA"),
        }
    }
}

/// A single clock punch: a kind plus a time of day.
///
/// Punches are day-scoped; the calendar date they belong to is carried
/// separately (see [`DayPunches`]). The caller is expected to supply punches
/// already sorted by time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    /// Whether this punch is a clock-in or a clock-out.
    #[serde(rename = "type")]
    pub kind: PunchKind,
    /// The wall-clock time of the punch.
    pub time: NaiveTime,
}

impl Punch {
    /// Creates a punch from a kind and an already-parsed time.
    pub fn new(kind: PunchKind, time: NaiveTime) -> Self {
        Self { kind, time }
    }

    /// Parses a punch from a kind and an `HH:MM:SS` time string.
    ///
    /// The format is strict: anything that does not parse as `%H:%M:%S`
    /// is rejected with [`EngineError::InvalidTimeFormat`] rather than
    /// coerced.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Punch, PunchKind};
    ///
    /// let punch = Punch::parse(PunchKind::Entrada, "08:30:00").unwrap();
    /// assert_eq!(punch.time.to_string(), "08:30:00");
    ///
    /// assert!(Punch::parse(PunchKind::Salida, "8h30").is_err());
    /// ```
    pub fn parse(kind: PunchKind, time: &str) -> EngineResult<Self> {
        let time = NaiveTime::parse_from_str(time, "%H:%M:%S").map_err(|e| {
            EngineError::InvalidTimeFormat {
                value: time.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { kind, time })
    }
}

/// The punches of one employee on one calendar date.
///
/// This is the input unit for the period report builders: the persistence
/// layer fetches and groups punch rows per date, the engine does the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPunches {
    /// The calendar date the punches belong to.
    pub date: NaiveDate,
    /// The punches for that date, sorted by time of day.
    pub punches: Vec<Punch>,
}

impl DayPunches {
    /// Creates a new day-scoped punch list.
    pub fn new(date: NaiveDate, punches: Vec<Punch>) -> Self {
        Self { date, punches }
    }
}
