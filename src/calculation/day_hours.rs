//! Per-day hours aggregation.
//!
//! This module runs the full day pipeline: pair the punches into
//! intervals, compute each interval's nocturnal hours, classify, and sum
//! the results into a [`DayBreakdown`].

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{DayBreakdown, Punch, REPORT_SCALE};

use super::hour_classification::classify_interval;
use super::interval_pairing::pair_punches;
use super::night_window::calculate_night_hours;

/// Calculates the payroll hours breakdown for one employee-day.
///
/// An empty punch list yields a zero-valued breakdown, not an error.
/// Unmatched punches are dropped by the pairing state machine and
/// contribute nothing to `worked`.
///
/// All hour fields of the result are rounded to two decimal places;
/// `worked` equals the sum of the paired interval durations.
///
/// # Errors
///
/// Returns [`EngineError::IntervalInversion`](crate::error::EngineError)
/// if an interval reports a negative duration after midnight
/// normalization, which indicates a broken internal invariant.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_day_hours;
/// use payroll_engine::config::EngineConfig;
/// use payroll_engine::models::{Punch, PunchKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let punches = vec![
///     Punch::parse(PunchKind::Entrada, "23:30:00").unwrap(),
///     Punch::parse(PunchKind::Salida, "01:30:00").unwrap(),
/// ];
/// // 2026-01-14 is a Wednesday.
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let day = calculate_day_hours(&punches, date, &EngineConfig::default()).unwrap();
///
/// assert_eq!(day.worked, Decimal::new(200, 2));          // 2.00
/// assert_eq!(day.night_surcharge, Decimal::new(200, 2)); // 2.00
/// assert_eq!(day.ordinary, Decimal::new(0, 2));
/// ```
pub fn calculate_day_hours(
    punches: &[Punch],
    date: NaiveDate,
    config: &EngineConfig,
) -> EngineResult<DayBreakdown> {
    let is_sunday = date.weekday() == Weekday::Sun;
    let mut day = DayBreakdown::empty(date, is_sunday);

    if punches.is_empty() {
        return Ok(day);
    }

    let outcome = pair_punches(punches);

    for interval in &outcome.intervals {
        let duration = interval.checked_duration_hours()?;
        let night_hours = calculate_night_hours(interval, config);
        let split = classify_interval(duration, night_hours, is_sunday, config);

        day.worked += duration;
        day.ordinary += split.ordinary;
        day.extra_day += split.extra_day;
        day.extra_night += split.extra_night;
        day.night_surcharge += split.night_surcharge;
        day.sunday += split.sunday;
    }
    day.intervals = outcome.intervals;

    day.worked = day.worked.round_dp(REPORT_SCALE);
    day.ordinary = day.ordinary.round_dp(REPORT_SCALE);
    day.extra_day = day.extra_day.round_dp(REPORT_SCALE);
    day.extra_night = day.extra_night.round_dp(REPORT_SCALE);
    day.night_surcharge = day.night_surcharge.round_dp(REPORT_SCALE);
    day.sunday = day.sunday.round_dp(REPORT_SCALE);

    debug!(
        %date,
        worked = %day.worked,
        intervals = day.intervals.len(),
        dropped = outcome.dropped.len(),
        "classified day"
    );

    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PunchKind;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn punch(kind: PunchKind, time: &str) -> Punch {
        Punch::parse(kind, time).unwrap()
    }

    // 2026-01-14 is a Wednesday, 2026-01-18 a Sunday.
    const WEDNESDAY: &str = "2026-01-14";
    const SUNDAY: &str = "2026-01-18";

    // ==========================================================================
    // DH-001: plain 8h shift
    // ==========================================================================
    #[test]
    fn test_dh_001_plain_eight_hour_shift() {
        let punches = vec![
            punch(PunchKind::Entrada, "08:00:00"),
            punch(PunchKind::Salida, "16:00:00"),
        ];
        let day = calculate_day_hours(&punches, date(WEDNESDAY), &EngineConfig::default())
            .unwrap();
        assert_eq!(day.worked, dec("8.00"));
        assert_eq!(day.ordinary, dec("8.00"));
        assert_eq!(day.extra_day, dec("0.00"));
        assert_eq!(day.extra_night, dec("0.00"));
        assert_eq!(day.night_surcharge, dec("0.00"));
        assert_eq!(day.sunday, dec("0.00"));
        assert!(!day.is_sunday);
        assert_eq!(day.intervals.len(), 1);
    }

    // ==========================================================================
    // DH-002: midnight crossing, fully nocturnal
    // ==========================================================================
    #[test]
    fn test_dh_002_midnight_crossing_shift() {
        let punches = vec![
            punch(PunchKind::Entrada, "23:30:00"),
            punch(PunchKind::Salida, "01:30:00"),
        ];
        let day = calculate_day_hours(&punches, date(WEDNESDAY), &EngineConfig::default())
            .unwrap();
        assert_eq!(day.worked, dec("2.00"));
        assert_eq!(day.night_surcharge, dec("2.00"));
        assert_eq!(day.ordinary, dec("0.00"));
    }

    // ==========================================================================
    // DH-003: 14:00-23:00 overtime split (9h, 2 nocturnal)
    // ==========================================================================
    #[test]
    fn test_dh_003_overtime_split() {
        let punches = vec![
            punch(PunchKind::Entrada, "14:00:00"),
            punch(PunchKind::Salida, "23:00:00"),
        ];
        let day = calculate_day_hours(&punches, date(WEDNESDAY), &EngineConfig::default())
            .unwrap();
        assert_eq!(day.worked, dec("9.00"));
        assert_eq!(day.ordinary, dec("7.00"));
        assert_eq!(day.extra_night, dec("0.22"));
        assert_eq!(day.extra_day, dec("0.78"));
        assert_eq!(day.night_surcharge, dec("1.78"));
    }

    // ==========================================================================
    // DH-004: Sunday routes everything to the Sunday bucket
    // ==========================================================================
    #[test]
    fn test_dh_004_sunday_shift() {
        let punches = vec![
            punch(PunchKind::Entrada, "14:00:00"),
            punch(PunchKind::Salida, "23:00:00"),
        ];
        let day =
            calculate_day_hours(&punches, date(SUNDAY), &EngineConfig::default()).unwrap();
        assert!(day.is_sunday);
        assert_eq!(day.sunday, dec("9.00"));
        assert_eq!(day.ordinary, dec("0.00"));
        assert_eq!(day.extra_day, dec("0.00"));
        assert_eq!(day.extra_night, dec("0.00"));
        assert_eq!(day.night_surcharge, dec("0.00"));
    }

    // ==========================================================================
    // DH-005: unmatched entry is dropped, worked counts only the pair
    // ==========================================================================
    #[test]
    fn test_dh_005_unmatched_entry_dropped() {
        let punches = vec![
            punch(PunchKind::Entrada, "08:00:00"),
            punch(PunchKind::Entrada, "12:00:00"),
            punch(PunchKind::Salida, "13:00:00"),
        ];
        let day = calculate_day_hours(&punches, date(WEDNESDAY), &EngineConfig::default())
            .unwrap();
        assert_eq!(day.worked, dec("1.00"));
        assert_eq!(day.intervals.len(), 1);
        assert_eq!(day.intervals[0].entry.to_string(), "12:00:00");
    }

    #[test]
    fn test_empty_punch_list_is_zero_breakdown() {
        let day = calculate_day_hours(&[], date(SUNDAY), &EngineConfig::default()).unwrap();
        assert_eq!(day.worked, Decimal::ZERO);
        assert_eq!(day.sunday, Decimal::ZERO);
        assert!(day.is_sunday);
        assert!(day.intervals.is_empty());
    }

    #[test]
    fn test_split_shift_sums_intervals() {
        let punches = vec![
            punch(PunchKind::Entrada, "08:00:00"),
            punch(PunchKind::Salida, "12:00:00"),
            punch(PunchKind::Entrada, "14:00:00"),
            punch(PunchKind::Salida, "18:00:00"),
        ];
        let day = calculate_day_hours(&punches, date(WEDNESDAY), &EngineConfig::default())
            .unwrap();
        assert_eq!(day.worked, dec("8.00"));
        assert_eq!(day.ordinary, dec("8.00"));
        assert_eq!(day.intervals.len(), 2);
    }

    #[test]
    fn test_sub_hour_durations_round_at_day_level() {
        // 50 minutes = 0.8333... -> 0.83
        let punches = vec![
            punch(PunchKind::Entrada, "09:00:00"),
            punch(PunchKind::Salida, "09:50:00"),
        ];
        let day = calculate_day_hours(&punches, date(WEDNESDAY), &EngineConfig::default())
            .unwrap();
        assert_eq!(day.worked, dec("0.83"));
        assert_eq!(day.ordinary, dec("0.83"));
    }

    #[test]
    fn test_is_sunday_flag_independent_of_punches() {
        let day = calculate_day_hours(&[], date(WEDNESDAY), &EngineConfig::default()).unwrap();
        assert!(!day.is_sunday);
    }
}
