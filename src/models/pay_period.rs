//! Pay period model and calendar helpers.
//!
//! This module contains the [`PayPeriod`] type and the pure calendar
//! arithmetic that resolves a reference date into the week, month, or
//! biweekly period (quincena) containing it.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range used to group day breakdowns into reports.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// // 2026-01-14 is a Wednesday; its week runs Monday 12th to Sunday 18th.
/// let week = PayPeriod::week_containing(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// assert_eq!(week.start_date, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(week.end_date, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Returns the Monday-to-Sunday week containing the reference date.
    pub fn week_containing(date: NaiveDate) -> Self {
        let start_date = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self {
            start_date,
            end_date: start_date + Duration::days(6),
        }
    }

    /// Returns the first-through-last-day range of the given month.
    ///
    /// December correctly rolls the end boundary into the next year.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when `month` is outside 1..=12.
    pub fn month(year: i32, month: u32) -> EngineResult<Self> {
        let start_date = first_day_of_month(year, month)?;
        let next_month = if month == 12 {
            first_day_of_month(year + 1, 1)?
        } else {
            first_day_of_month(year, month + 1)?
        };
        Ok(Self {
            start_date,
            end_date: next_month - Duration::days(1),
        })
    }

    /// Returns a biweekly payroll period (quincena).
    ///
    /// Half 1 covers days 1–15; half 2 covers day 16 through the last day
    /// of the month, so its length varies between 13 and 16 days.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when `month` is outside
    /// 1..=12 or `half` is not 1 or 2.
    pub fn biweekly(year: i32, month: u32, half: u8) -> EngineResult<Self> {
        let month_range = Self::month(year, month)?;
        match half {
            1 => Ok(Self {
                start_date: month_range.start_date,
                end_date: month_range
                    .start_date
                    .with_day(15)
                    .ok_or_else(|| EngineError::InvalidPeriod {
                        message: format!("no day 15 in {year}-{month:02}"),
                    })?,
            }),
            2 => Ok(Self {
                start_date: month_range.start_date.with_day(16).ok_or_else(|| {
                    EngineError::InvalidPeriod {
                        message: format!("no day 16 in {year}-{month:02}"),
                    }
                })?,
                end_date: month_range.end_date,
            }),
            other => Err(EngineError::InvalidPeriod {
                message: format!("biweekly half must be 1 or 2, got {other}"),
            }),
        }
    }

    /// Checks if a given date falls within this period, inclusive of both
    /// boundaries.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The number of days in the period.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

fn first_day_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| EngineError::InvalidPeriod {
        message: format!("month must be between 1 and 12, got {month}"),
    })
}
