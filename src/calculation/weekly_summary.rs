//! Weekly hours report builder.
//!
//! This module aggregates day breakdowns across the Monday-to-Sunday week
//! containing a reference date and raises an alert when the worked total
//! exceeds the configured weekly limit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{DayBreakdown, DayPunches, HoursTotals, PayPeriod};

use super::day_hours::calculate_day_hours;

/// A week of classified hours for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// The Monday-to-Sunday week the summary covers.
    pub week: PayPeriod,
    /// The per-day breakdowns, ordered by date.
    pub days: Vec<DayBreakdown>,
    /// The accumulated hour totals for the week.
    pub totals: HoursTotals,
    /// Whether the worked total exceeds the weekly hours limit.
    pub over_weekly_limit: bool,
    /// Worked hours beyond the limit (zero when not exceeded).
    pub excess_hours: Decimal,
}

/// Builds the weekly summary for the week containing `reference_date`.
///
/// Input days outside that week are skipped; the persistence layer
/// normally fetches exactly the week's rows, but the filter keeps the
/// report correct either way.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::build_weekly_summary;
/// use payroll_engine::config::EngineConfig;
/// use payroll_engine::models::{DayPunches, Punch, PunchKind};
/// use chrono::NaiveDate;
///
/// let days = vec![DayPunches::new(
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     vec![
///         Punch::parse(PunchKind::Entrada, "08:00:00").unwrap(),
///         Punch::parse(PunchKind::Salida, "16:00:00").unwrap(),
///     ],
/// )];
///
/// let summary = build_weekly_summary(
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     &days,
///     &EngineConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(summary.days.len(), 1);
/// assert!(!summary.over_weekly_limit);
/// ```
pub fn build_weekly_summary(
    reference_date: NaiveDate,
    days: &[DayPunches],
    config: &EngineConfig,
) -> EngineResult<WeeklySummary> {
    let week = PayPeriod::week_containing(reference_date);

    let mut in_week: Vec<&DayPunches> = days
        .iter()
        .filter(|day| {
            let keep = week.contains_date(day.date);
            if !keep {
                debug!(date = %day.date, "skipping day outside the reference week");
            }
            keep
        })
        .collect();
    in_week.sort_by_key(|day| day.date);

    let mut breakdowns = Vec::with_capacity(in_week.len());
    let mut totals = HoursTotals::new();
    for day in in_week {
        let breakdown = calculate_day_hours(&day.punches, day.date, config)?;
        totals.accumulate(&breakdown);
        breakdowns.push(breakdown);
    }
    let totals = totals.rounded();

    let over_weekly_limit = totals.worked > config.weekly_hours_limit;
    let excess_hours = (totals.worked - config.weekly_hours_limit).max(Decimal::ZERO);

    Ok(WeeklySummary {
        week,
        days: breakdowns,
        totals,
        over_weekly_limit,
        excess_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Punch, PunchKind};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn shift(day: &str, entry: &str, exit: &str) -> DayPunches {
        DayPunches::new(
            date(day),
            vec![
                Punch::parse(PunchKind::Entrada, entry).unwrap(),
                Punch::parse(PunchKind::Salida, exit).unwrap(),
            ],
        )
    }

    // Week of 2026-01-12 (Monday) through 2026-01-18 (Sunday).

    #[test]
    fn test_week_within_limit() {
        let days: Vec<DayPunches> = ["2026-01-12", "2026-01-13", "2026-01-14"]
            .iter()
            .map(|d| shift(d, "08:00:00", "16:00:00"))
            .collect();

        let summary =
            build_weekly_summary(date("2026-01-14"), &days, &EngineConfig::default()).unwrap();

        assert_eq!(summary.week.start_date, date("2026-01-12"));
        assert_eq!(summary.week.end_date, date("2026-01-18"));
        assert_eq!(summary.days.len(), 3);
        assert_eq!(summary.totals.worked, dec("24.00"));
        assert_eq!(summary.totals.ordinary, dec("24.00"));
        assert!(!summary.over_weekly_limit);
        assert_eq!(summary.excess_hours, Decimal::ZERO);
    }

    #[test]
    fn test_week_over_limit_raises_alert() {
        // Six 9-hour shifts Monday through Saturday: 54 worked hours
        let days: Vec<DayPunches> = [
            "2026-01-12",
            "2026-01-13",
            "2026-01-14",
            "2026-01-15",
            "2026-01-16",
            "2026-01-17",
        ]
        .iter()
        .map(|d| shift(d, "08:00:00", "17:00:00"))
        .collect();

        let summary =
            build_weekly_summary(date("2026-01-12"), &days, &EngineConfig::default()).unwrap();

        assert_eq!(summary.totals.worked, dec("54.00"));
        assert!(summary.over_weekly_limit);
        assert_eq!(summary.excess_hours, dec("6.00"));
    }

    #[test]
    fn test_days_outside_week_are_skipped() {
        let days = vec![
            shift("2026-01-14", "08:00:00", "16:00:00"),
            shift("2026-01-19", "08:00:00", "16:00:00"), // next Monday
        ];

        let summary =
            build_weekly_summary(date("2026-01-14"), &days, &EngineConfig::default()).unwrap();

        assert_eq!(summary.days.len(), 1);
        assert_eq!(summary.totals.worked, dec("8.00"));
    }

    #[test]
    fn test_days_are_ordered_by_date() {
        let days = vec![
            shift("2026-01-16", "08:00:00", "16:00:00"),
            shift("2026-01-12", "08:00:00", "16:00:00"),
        ];

        let summary =
            build_weekly_summary(date("2026-01-14"), &days, &EngineConfig::default()).unwrap();

        assert_eq!(summary.days[0].date, date("2026-01-12"));
        assert_eq!(summary.days[1].date, date("2026-01-16"));
    }

    #[test]
    fn test_sunday_hours_feed_the_sunday_total() {
        let days = vec![shift("2026-01-18", "08:00:00", "14:00:00")];

        let summary =
            build_weekly_summary(date("2026-01-14"), &days, &EngineConfig::default()).unwrap();

        assert_eq!(summary.totals.sunday, dec("6.00"));
        assert_eq!(summary.totals.ordinary, dec("0.00"));
    }

    #[test]
    fn test_empty_week() {
        let summary =
            build_weekly_summary(date("2026-01-14"), &[], &EngineConfig::default()).unwrap();
        assert!(summary.days.is_empty());
        assert_eq!(summary.totals.worked, Decimal::ZERO);
        assert!(!summary.over_weekly_limit);
    }

    #[test]
    fn test_custom_weekly_limit() {
        let config = EngineConfig {
            weekly_hours_limit: dec("10"),
            ..EngineConfig::default()
        };
        let days = vec![
            shift("2026-01-12", "08:00:00", "16:00:00"),
            shift("2026-01-13", "08:00:00", "16:00:00"),
        ];

        let summary = build_weekly_summary(date("2026-01-12"), &days, &config).unwrap();
        assert!(summary.over_weekly_limit);
        assert_eq!(summary.excess_hours, dec("6.00"));
    }
}
