//! Hour classification for a single work interval.
//!
//! This module splits an interval's duration into pay categories:
//! ordinary hours, daytime/nighttime overtime, night surcharge, and Sunday
//! hours. Sunday routes the whole duration to the Sunday bucket; any other
//! day splits around the ordinary allotment, distributing overtime between
//! its daytime and nighttime portions in proportion to how nocturnal the
//! whole interval was.

use rust_decimal::Decimal;

use crate::config::EngineConfig;

/// The pay-category split of one interval's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalClassification {
    /// Daytime hours within the ordinary allotment.
    pub ordinary: Decimal,
    /// Overtime hours attributed to the daytime portion.
    pub extra_day: Decimal,
    /// Overtime hours attributed to the nighttime portion.
    pub extra_night: Decimal,
    /// Non-overtime nocturnal hours, paid with the night surcharge.
    pub night_surcharge: Decimal,
    /// Sunday hours (whole duration when the date is a Sunday).
    pub sunday: Decimal,
}

impl IntervalClassification {
    fn zero() -> Self {
        Self {
            ordinary: Decimal::ZERO,
            extra_day: Decimal::ZERO,
            extra_night: Decimal::ZERO,
            night_surcharge: Decimal::ZERO,
            sunday: Decimal::ZERO,
        }
    }
}

/// Classifies one interval's duration into pay categories.
///
/// Rules, in priority order:
///
/// 1. On a Sunday the entire duration is Sunday hours. No day/night or
///    overtime distinction applies; Sunday night hours carry no separate
///    surcharge.
/// 2. Duration within the ordinary allotment: the diurnal part is
///    ordinary, the nocturnal part earns the night surcharge.
/// 3. Duration beyond the allotment: ordinary is the diurnal part capped
///    at the allotment; the excess is overtime, split between night and
///    day in proportion to the interval's nocturnal fraction; nocturnal
///    hours not consumed by overtime keep the surcharge rate.
///
/// # Arguments
///
/// * `duration` - The interval's total duration in hours
/// * `night_hours` - The nocturnal hours of the interval (see
///   [`calculate_night_hours`](super::calculate_night_hours))
/// * `is_sunday` - Whether the interval's calendar date is a Sunday
/// * `config` - Engine constants (ordinary allotment)
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::classify_interval;
/// use payroll_engine::config::EngineConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let config = EngineConfig::default();
///
/// // 9h shift with 2 nocturnal hours on a weekday.
/// let split = classify_interval(dec("9"), dec("2"), false, &config);
/// assert_eq!(split.ordinary, dec("7"));
/// assert_eq!(split.extra_night.round_dp(2), dec("0.22"));
/// assert_eq!(split.extra_day.round_dp(2), dec("0.78"));
/// assert_eq!(split.night_surcharge.round_dp(2), dec("1.78"));
/// ```
pub fn classify_interval(
    duration: Decimal,
    night_hours: Decimal,
    is_sunday: bool,
    config: &EngineConfig,
) -> IntervalClassification {
    let mut split = IntervalClassification::zero();

    if is_sunday {
        split.sunday = duration;
        return split;
    }

    let day_hours = duration - night_hours;
    let allotment = config.ordinary_hours_per_day;

    if duration <= allotment {
        split.ordinary = day_hours;
        split.night_surcharge = night_hours;
        return split;
    }

    split.ordinary = day_hours.min(allotment);

    let overtime = duration - allotment;
    let night_fraction = if duration > Decimal::ZERO {
        night_hours / duration
    } else {
        Decimal::ZERO
    };
    split.extra_night = overtime * night_fraction;
    split.extra_day = overtime * (Decimal::ONE - night_fraction);
    split.night_surcharge = night_hours - split.extra_night;

    split
}
