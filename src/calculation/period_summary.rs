//! Monthly and biweekly period report builders.
//!
//! This module consolidates day breakdowns over a calendar month or a
//! biweekly payroll period (quincena). The biweekly builder also values
//! the accumulated hours, applying the caller-supplied Sunday-pay
//! eligibility flag: hours worked on Sundays by an ineligible employee
//! are excluded from the paid categories, not reclassified.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{EngineConfig, RateTable};
use crate::error::EngineResult;
use crate::models::{DayPunches, HoursTotals, MonetaryBreakdown, PayPeriod};

use super::day_hours::calculate_day_hours;
use super::valuation::calculate_pay_value;

/// Consolidated hours for one employee over a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The month's date range.
    pub period: PayPeriod,
    /// Number of days in the period with at least one punch.
    pub days_worked: usize,
    /// The accumulated hour totals.
    pub totals: HoursTotals,
}

/// Builds the monthly consolidation for `year`/`month`.
///
/// Input days outside the month are skipped.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError) for a
/// month outside 1..=12.
pub fn build_monthly_summary(
    year: i32,
    month: u32,
    days: &[DayPunches],
    config: &EngineConfig,
) -> EngineResult<MonthlySummary> {
    let period = PayPeriod::month(year, month)?;
    let (days_worked, totals) = accumulate_period(&period, days, true, config)?;

    Ok(MonthlySummary {
        period,
        days_worked,
        totals,
    })
}

/// Hours and monetary values for one employee over a biweekly payroll
/// period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiweeklyPayroll {
    /// The quincena's date range.
    pub period: PayPeriod,
    /// Which half of the month the period covers (1 or 2).
    pub half: u8,
    /// Number of days in the period with at least one punch.
    pub days_worked: usize,
    /// Whether the employee is entitled to Sunday pay.
    pub sunday_pay_eligible: bool,
    /// The accumulated hour totals. `worked` reflects all time on the
    /// clock; `sunday` is zero when the employee is not eligible.
    pub hours: HoursTotals,
    /// The monetary valuation of `hours`.
    pub values: MonetaryBreakdown,
}

/// Builds the biweekly payroll summary for `year`/`month`, half 1 or 2.
///
/// Eligibility is an input, not something the engine derives: the
/// persistence layer knows whether the employee settles Sunday pay, and
/// passes the flag here.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::build_biweekly_payroll;
/// use payroll_engine::config::{EngineConfig, RateKey, RateTable};
/// use payroll_engine::models::{DayPunches, Punch, PunchKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::new().with_rate(RateKey::Ordinary, Decimal::new(5000, 0));
/// let days = vec![DayPunches::new(
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     vec![
///         Punch::parse(PunchKind::Entrada, "08:00:00").unwrap(),
///         Punch::parse(PunchKind::Salida, "16:00:00").unwrap(),
///     ],
/// )];
///
/// let payroll = build_biweekly_payroll(
///     2026, 1, 1, &days, true, &rates, &EngineConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(payroll.values.ordinary, Decimal::new(4000000, 2)); // 40000.00
/// ```
pub fn build_biweekly_payroll(
    year: i32,
    month: u32,
    half: u8,
    days: &[DayPunches],
    sunday_pay_eligible: bool,
    rates: &RateTable,
    config: &EngineConfig,
) -> EngineResult<BiweeklyPayroll> {
    let period = PayPeriod::biweekly(year, month, half)?;
    let (days_worked, hours) = accumulate_period(&period, days, sunday_pay_eligible, config)?;
    let values = calculate_pay_value(&hours, rates, config);

    Ok(BiweeklyPayroll {
        period,
        half,
        days_worked,
        sunday_pay_eligible,
        hours,
        values,
    })
}

/// Classifies every in-period day and accumulates the totals.
///
/// `include_sunday` gates only the `sunday` category; `worked` always
/// counts all time on the clock.
fn accumulate_period(
    period: &PayPeriod,
    days: &[DayPunches],
    include_sunday: bool,
    config: &EngineConfig,
) -> EngineResult<(usize, HoursTotals)> {
    let mut days_worked = 0usize;
    let mut totals = HoursTotals::new();

    for day in days {
        if !period.contains_date(day.date) {
            debug!(date = %day.date, "skipping day outside the period");
            continue;
        }
        if day.punches.is_empty() {
            continue;
        }
        days_worked += 1;

        let breakdown = calculate_day_hours(&day.punches, day.date, config)?;
        totals.worked += breakdown.worked;
        totals.ordinary += breakdown.ordinary;
        totals.extra_day += breakdown.extra_day;
        totals.extra_night += breakdown.extra_night;
        totals.night_surcharge += breakdown.night_surcharge;
        if include_sunday {
            totals.sunday += breakdown.sunday;
        }
    }

    Ok((days_worked, totals.rounded()))
}
