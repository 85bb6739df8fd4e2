//! Work interval model.
//!
//! A [`WorkInterval`] is a paired (entry, exit) span produced by the punch
//! pairing state machine. Intervals are normalized so that an exit earlier
//! than its entry means the exit occurred after midnight of the following
//! day.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Seconds in a day.
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// A paired (entry, exit) work span within one day-scoped punch list.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WorkInterval;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// // A shift crossing midnight: 23:30 to 01:30.
/// let interval = WorkInterval {
///     entry: NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
///     exit: NaiveTime::from_hms_opt(1, 30, 0).unwrap(),
/// };
/// assert!(interval.crosses_midnight());
/// assert_eq!(interval.duration_hours(), Decimal::new(20, 1)); // 2.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The clock-in time.
    pub entry: NaiveTime,
    /// The clock-out time. Earlier than `entry` when the shift crosses
    /// midnight.
    pub exit: NaiveTime,
}

impl WorkInterval {
    /// Creates a new interval.
    pub fn new(entry: NaiveTime, exit: NaiveTime) -> Self {
        Self { entry, exit }
    }

    /// Returns `true` when the exit occurred after midnight of the
    /// following day.
    pub fn crosses_midnight(&self) -> bool {
        self.exit < self.entry
    }

    /// The entry time as seconds from midnight of the interval's day.
    pub(crate) fn entry_seconds(&self) -> i64 {
        i64::from(self.entry.num_seconds_from_midnight())
    }

    /// The exit time as seconds from midnight of the interval's day,
    /// shifted by 24h when the interval crosses midnight.
    pub(crate) fn exit_seconds(&self) -> i64 {
        let exit = i64::from(self.exit.num_seconds_from_midnight());
        if self.crosses_midnight() {
            exit + SECONDS_PER_DAY
        } else {
            exit
        }
    }

    /// Calculates the interval duration in hours.
    ///
    /// Always ≥ 0: an exit before the entry is interpreted as crossing
    /// midnight, i.e. duration = `(exit + 24h) - entry`.
    pub fn duration_hours(&self) -> Decimal {
        let seconds = self.exit_seconds() - self.entry_seconds();
        Decimal::new(seconds, 0) / Decimal::new(3600, 0)
    }

    /// Like [`duration_hours`](Self::duration_hours), but reports a
    /// negative duration as [`EngineError::IntervalInversion`].
    ///
    /// Normalization makes a negative duration impossible for intervals
    /// built from [`NaiveTime`] pairs; this guard exists so that a broken
    /// invariant surfaces as an error instead of corrupting a breakdown.
    pub fn checked_duration_hours(&self) -> EngineResult<Decimal> {
        let duration = self.duration_hours();
        if duration < Decimal::ZERO {
            return Err(EngineError::IntervalInversion {
                entry: self.entry,
                exit: self.exit,
            });
        }
        Ok(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_plain_interval_duration() {
        let interval = WorkInterval::new(time(8, 0), time(16, 0));
        assert!(!interval.crosses_midnight());
        assert_eq!(interval.duration_hours(), dec("8"));
    }

    #[test]
    fn test_midnight_crossing_duration() {
        let interval = WorkInterval::new(time(23, 30), time(1, 30));
        assert!(interval.crosses_midnight());
        assert_eq!(interval.duration_hours(), dec("2"));
    }

    #[test]
    fn test_zero_duration() {
        let interval = WorkInterval::new(time(9, 0), time(9, 0));
        assert!(!interval.crosses_midnight());
        assert_eq!(interval.duration_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_duration() {
        // 45 minutes
        let interval = WorkInterval::new(time(10, 15), time(11, 0));
        assert_eq!(interval.duration_hours(), dec("0.75"));
    }

    #[test]
    fn test_almost_full_day_crossing() {
        // 22:00 to 21:00 next day = 23 hours
        let interval = WorkInterval::new(time(22, 0), time(21, 0));
        assert_eq!(interval.duration_hours(), dec("23"));
    }

    #[test]
    fn test_checked_duration_is_ok_for_normalized_interval() {
        let interval = WorkInterval::new(time(23, 0), time(2, 0));
        assert_eq!(interval.checked_duration_hours().unwrap(), dec("3"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let interval = WorkInterval::new(time(8, 0), time(16, 30));
        let json = serde_json::to_string(&interval).unwrap();
        let back: WorkInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interval);
    }
}
