//! Hours and monetary breakdown models.
//!
//! This module contains the value objects produced by the classification
//! engine: the per-day [`DayBreakdown`], the period-level [`HoursTotals`],
//! and the [`MonetaryBreakdown`] produced by the payroll valuator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WorkInterval;

/// The decimal places used for every reported hour and monetary value.
pub const REPORT_SCALE: u32 = 2;

/// Payroll-grade breakdown of the time worked on one calendar day.
///
/// All hour fields are expressed in hours and rounded to two decimal
/// places. `worked` equals the sum of the durations of `intervals`.
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
///     Punch::parse(PunchKind::Entrada, "08:00:00").unwrap(),
///     Punch::parse(PunchKind::Salida, "16:00:00").unwrap(),
/// ];
/// // 2026-01-14 is a Wednesday.
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let day = calculate_day_hours(&punches, date, &EngineConfig::default()).unwrap();
///
/// assert_eq!(day.worked, Decimal::new(800, 2)); // 8.00
/// assert_eq!(day.ordinary, Decimal::new(800, 2));
/// assert!(!day.is_sunday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// The calendar date of the breakdown.
    pub date: NaiveDate,
    /// Total hours on the clock (sum of interval durations).
    pub worked: Decimal,
    /// Daytime hours within the ordinary allotment, paid at base rate.
    pub ordinary: Decimal,
    /// Overtime hours attributed to the daytime portion of the interval.
    pub extra_day: Decimal,
    /// Overtime hours attributed to the nighttime portion of the interval.
    pub extra_night: Decimal,
    /// Non-overtime hours inside the night window, paid with a surcharge.
    pub night_surcharge: Decimal,
    /// Hours worked on a Sunday, paid at the holiday rate.
    pub sunday: Decimal,
    /// Whether the date is a Sunday.
    pub is_sunday: bool,
    /// The (entry, exit) pairs that produced this breakdown, for
    /// audit/display.
    pub intervals: Vec<WorkInterval>,
}

impl DayBreakdown {
    /// Creates a zero-valued breakdown for a date with no paired intervals.
    pub fn empty(date: NaiveDate, is_sunday: bool) -> Self {
        Self {
            date,
            worked: Decimal::ZERO,
            ordinary: Decimal::ZERO,
            extra_day: Decimal::ZERO,
            extra_night: Decimal::ZERO,
            night_surcharge: Decimal::ZERO,
            sunday: Decimal::ZERO,
            is_sunday,
            intervals: Vec::new(),
        }
    }
}

/// Accumulated hour totals across the days of a reporting period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursTotals {
    /// Total hours on the clock.
    pub worked: Decimal,
    /// Total ordinary hours.
    pub ordinary: Decimal,
    /// Total daytime overtime hours.
    pub extra_day: Decimal,
    /// Total nighttime overtime hours.
    pub extra_night: Decimal,
    /// Total night-surcharge hours.
    pub night_surcharge: Decimal,
    /// Total Sunday hours.
    pub sunday: Decimal,
}

impl HoursTotals {
    /// Creates zeroed totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every category of a day's breakdown into the totals.
    pub fn accumulate(&mut self, day: &DayBreakdown) {
        self.worked += day.worked;
        self.ordinary += day.ordinary;
        self.extra_day += day.extra_day;
        self.extra_night += day.extra_night;
        self.night_surcharge += day.night_surcharge;
        self.sunday += day.sunday;
    }

    /// Returns the totals with every field rounded to two decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            worked: self.worked.round_dp(REPORT_SCALE),
            ordinary: self.ordinary.round_dp(REPORT_SCALE),
            extra_day: self.extra_day.round_dp(REPORT_SCALE),
            extra_night: self.extra_night.round_dp(REPORT_SCALE),
            night_surcharge: self.night_surcharge.round_dp(REPORT_SCALE),
            sunday: self.sunday.round_dp(REPORT_SCALE),
        }
    }
}

/// Monetary valuation of an hours breakdown.
///
/// Each component is rounded to two decimal places independently before
/// `total` is computed, so `total` is always the exact sum of the component
/// fields as reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryBreakdown {
    /// Value of the ordinary hours.
    pub ordinary: Decimal,
    /// Value of the daytime overtime hours.
    pub extra_day: Decimal,
    /// Value of the nighttime overtime hours.
    pub extra_night: Decimal,
    /// Value of the night-surcharge hours.
    pub night_surcharge: Decimal,
    /// Value of the Sunday hours.
    pub sunday: Decimal,
    /// Sum of the five component values above.
    pub total: Decimal,
}
