//! Night window overlap computation.
//!
//! This module computes how much of a work interval falls inside the
//! nightly window (21:00–06:00 by default). The result is obtained by
//! closed-form interval overlap on a seconds-from-midnight axis extended
//! to 48 hours, which is exactly equivalent to scanning the interval
//! minute by minute: every instant has a single, unambiguous night/day
//! classification, so summing the overlaps with the night segments gives
//! the same count without the O(duration) cost.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{WorkInterval, REPORT_SCALE, SECONDS_PER_DAY};

/// Calculates the hours of an interval that fall inside the night window.
///
/// The interval is placed on a 48-hour axis (midnight-crossing exits land
/// past the 24h mark) and intersected with each night segment on that
/// axis. The result is rounded to two decimal places, the precision at
/// which night hours enter the classification.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_night_hours;
/// use payroll_engine::config::EngineConfig;
/// use payroll_engine::models::WorkInterval;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
///
/// // 14:00 to 23:00: the 21:00-23:00 stretch is nocturnal.
/// let interval = WorkInterval {
///     entry: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
///     exit: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
/// };
/// assert_eq!(calculate_night_hours(&interval, &config), Decimal::new(2, 0));
/// ```
pub fn calculate_night_hours(interval: &WorkInterval, config: &EngineConfig) -> Decimal {
    use chrono::Timelike;

    let entry = interval.entry_seconds();
    let exit = interval.exit_seconds();

    let window_start = i64::from(config.night_window_start.num_seconds_from_midnight());
    let window_end = i64::from(config.night_window_end.num_seconds_from_midnight());

    let night_seconds: i64 = night_segments(window_start, window_end)
        .into_iter()
        .map(|(seg_start, seg_end)| overlap_seconds(entry, exit, seg_start, seg_end))
        .sum();

    (Decimal::new(night_seconds, 0) / Decimal::new(3600, 0)).round_dp(REPORT_SCALE)
}

/// The night window as half-open segments on the 48-hour axis.
///
/// A wrapping window (start > end, e.g. 21:00–06:00) covers
/// `[start, 24h+end)` plus the leading `[0, end)` stub of day zero and the
/// trailing `[24h+start, 48h)` stub of day one. A non-wrapping window
/// repeats on both days. A degenerate window (start == end) is empty.
fn night_segments(window_start: i64, window_end: i64) -> Vec<(i64, i64)> {
    use std::cmp::Ordering;

    match window_start.cmp(&window_end) {
        Ordering::Greater => vec![
            (0, window_end),
            (window_start, SECONDS_PER_DAY + window_end),
            (SECONDS_PER_DAY + window_start, 2 * SECONDS_PER_DAY),
        ],
        Ordering::Less => vec![
            (window_start, window_end),
            (SECONDS_PER_DAY + window_start, SECONDS_PER_DAY + window_end),
        ],
        Ordering::Equal => Vec::new(),
    }
}

/// Length of the intersection of `[a, b)` and `[c, d)`.
fn overlap_seconds(a: i64, b: i64, c: i64, d: i64) -> i64 {
    (b.min(d) - a.max(c)).max(0)
}
