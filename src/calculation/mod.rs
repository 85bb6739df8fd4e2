//! Calculation logic for the payroll hours engine.
//!
//! This module contains the punch pairing state machine, the night window
//! overlap computation, per-interval hour classification, per-day
//! aggregation, payroll valuation, and the weekly/monthly/biweekly report
//! builders.

mod day_hours;
mod hour_classification;
mod interval_pairing;
mod night_window;
mod period_summary;
mod valuation;
mod weekly_summary;

pub use day_hours::calculate_day_hours;
pub use hour_classification::{IntervalClassification, classify_interval};
pub use interval_pairing::{PairingOutcome, pair_punches};
pub use night_window::calculate_night_hours;
pub use period_summary::{
    BiweeklyPayroll, MonthlySummary, build_biweekly_payroll, build_monthly_summary,
};
pub use valuation::calculate_pay_value;
pub use weekly_summary::{WeeklySummary, build_weekly_summary};
