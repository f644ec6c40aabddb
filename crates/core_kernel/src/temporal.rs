//! Calendar date handling for policy periods
//!
//! This module provides the date arithmetic used when splitting a policy
//! period ("vigencia") into sub-periods:
//! - Strict ISO date parsing
//! - Calendar month addition with day-of-month clamping
//! - Fractional month offsets expressed as exact ratios
//! - Inclusive date ranges

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format accepted from and emitted to the UI
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{0}': expected a calendar date in YYYY-MM-DD form")]
    InvalidDate(String),

    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Date arithmetic out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid month ratio: denominator must be positive")]
    ZeroDenominator,
}

/// Parses a calendar date in `YYYY-MM-DD` form
///
/// Impossible dates such as `2025-02-30` are rejected rather than clamped.
pub fn parse_calendar_date(text: &str) -> Result<NaiveDate, TemporalError> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, CALENDAR_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(trimmed.to_string()))
}

/// Adds whole calendar months to a date
///
/// When the resulting month is shorter than the starting day of month,
/// the day is clamped to the month's last day (Jan 31 + 1 month = Feb 28).
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, TemporalError> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| TemporalError::OutOfRange(format!("{date} + {months} months")))
}

/// Adds days to a date
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, TemporalError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| TemporalError::OutOfRange(format!("{date} + {days} days")))
}

/// Returns the day before the given date
pub fn previous_day(date: NaiveDate) -> Result<NaiveDate, TemporalError> {
    date.pred_opt()
        .ok_or_else(|| TemporalError::OutOfRange(format!("day before {date}")))
}

/// A month offset that may be fractional, kept as an exact ratio
///
/// `MonthOffset::ratio(24, 10)` is 2.4 months: two whole calendar months
/// followed by 4/10 of the next month's length in days.
///
/// The fractional part is converted to days against the month that
/// follows the whole-month anchor, measured from the original date, and
/// rounded half up to the nearest day. Offsets that come out whole are
/// pure calendar month additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOffset {
    whole: u32,
    remainder: u64,
    denominator: u64,
}

impl MonthOffset {
    /// Creates an offset of `numerator / denominator` months
    pub fn ratio(numerator: u64, denominator: u64) -> Result<Self, TemporalError> {
        if denominator == 0 {
            return Err(TemporalError::ZeroDenominator);
        }
        let whole = u32::try_from(numerator / denominator)
            .map_err(|_| TemporalError::OutOfRange(format!("{numerator}/{denominator} months")))?;
        Ok(Self {
            whole,
            remainder: numerator % denominator,
            denominator,
        })
    }

    /// Creates a whole-month offset
    pub fn whole(months: u32) -> Self {
        Self {
            whole: months,
            remainder: 0,
            denominator: 1,
        }
    }

    /// Returns the whole-month component
    pub fn whole_months(&self) -> u32 {
        self.whole
    }

    /// Returns true if the offset has no fractional component
    pub fn is_whole(&self) -> bool {
        self.remainder == 0
    }

    /// Applies the offset to a date
    pub fn apply(&self, date: NaiveDate) -> Result<NaiveDate, TemporalError> {
        let anchor = add_months(date, self.whole)?;
        if self.is_whole() {
            return Ok(anchor);
        }

        let next = add_months(date, self.whole + 1)?;
        let month_len = u64::try_from((next - anchor).num_days())
            .map_err(|_| TemporalError::OutOfRange(format!("month after {anchor}")))?;

        // round(remainder * month_len / denominator), half up
        let days = (2 * self.remainder * month_len + self.denominator) / (2 * self.denominator);
        add_days(anchor, days)
    }
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Builds the range covering `[start, end_exclusive)`
    pub fn half_open(start: NaiveDate, end_exclusive: NaiveDate) -> Result<Self, TemporalError> {
        if end_exclusive <= start {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end_exclusive.to_string(),
            });
        }
        Self::new(start, previous_day(end_exclusive)?)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, both ends included
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns true if `next` starts exactly one day after this range ends
    pub fn is_followed_by(&self, next: &DateRange) -> bool {
        self.end.succ_opt() == Some(next.start)
    }
}
