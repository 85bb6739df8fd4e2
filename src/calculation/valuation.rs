//! Payroll valuation of an hours breakdown.
//!
//! This module converts accumulated hour totals plus a rate table into a
//! monetary breakdown. The night surcharge and Sunday factors apply to the
//! ordinary rate, not to the overtime rates.

use rust_decimal::Decimal;

use crate::config::{EngineConfig, RateKey, RateTable};
use crate::models::{HoursTotals, MonetaryBreakdown, REPORT_SCALE};

/// Values an hours breakdown against a rate table.
///
/// ```text
/// ordinary        = ordinary        × rate(ordinary)
/// extra_day       = extra_day       × rate(extra_day)
/// extra_night     = extra_night     × rate(extra_night)
/// night_surcharge = night_surcharge × rate(ordinary) × night_surcharge_factor
/// sunday          = sunday          × rate(ordinary) × sunday_factor
/// ```
///
/// Each component is rounded to two decimal places BEFORE summation and
/// `total` is the sum of the already-rounded components. The ordering
/// matters: rounding-then-summing can differ from summing-then-rounding
/// by one cent at the margins, and downstream consumers reconcile the
/// total against the printed components.
///
/// Rates for absent keys are zero, so a partially-configured table still
/// yields a total-correct valuation.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pay_value;
/// use payroll_engine::config::{EngineConfig, RateKey, RateTable};
/// use payroll_engine::models::HoursTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let rates = RateTable::new().with_rate(RateKey::Ordinary, dec("5000"));
/// let hours = HoursTotals {
///     night_surcharge: dec("2"),
///     ..HoursTotals::default()
/// };
///
/// let value = calculate_pay_value(&hours, &rates, &EngineConfig::default());
/// assert_eq!(value.night_surcharge, dec("13500.00")); // 2 × 5000 × 1.35
/// assert_eq!(value.total, dec("13500.00"));
/// ```
pub fn calculate_pay_value(
    hours: &HoursTotals,
    rates: &RateTable,
    config: &EngineConfig,
) -> MonetaryBreakdown {
    let ordinary_rate = rates.rate(RateKey::Ordinary);

    let ordinary = (hours.ordinary * ordinary_rate).round_dp(REPORT_SCALE);
    let extra_day = (hours.extra_day * rates.rate(RateKey::ExtraDay)).round_dp(REPORT_SCALE);
    let extra_night =
        (hours.extra_night * rates.rate(RateKey::ExtraNight)).round_dp(REPORT_SCALE);
    let night_surcharge = (hours.night_surcharge * ordinary_rate * config.night_surcharge_factor)
        .round_dp(REPORT_SCALE);
    let sunday = (hours.sunday * ordinary_rate * config.sunday_factor).round_dp(REPORT_SCALE);

    let total = ordinary + extra_day + extra_night + night_surcharge + sunday;

    MonetaryBreakdown {
        ordinary,
        extra_day,
        extra_night,
        night_surcharge,
        sunday,
        total,
    }
}
