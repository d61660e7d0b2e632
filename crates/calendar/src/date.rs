//! Vana'diel calendar date without time of day.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::day_count::{
    EarthDayCount, earth_instant_for_date, vana_days_since_epoch, vana_to_earth_day_count,
};
use crate::earth::EarthInstant;
use crate::error::CalendarError;
use crate::weekday::{DAYS_PER_WEEK, Weekday};

/// Months per Vana'diel year.
pub const MONTHS_PER_YEAR: u8 = 12;

/// Days per Vana'diel month. Every month has the same length.
pub const DAYS_PER_MONTH: u8 = 30;

/// A Vana'diel calendar date: any year, month 1..=12, day 1..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VanaDate {
    year: i64,
    month: u8,
    day: u8,
}

impl VanaDate {
    /// Creates a date, rejecting months outside 1..=12 and days outside 1..=30.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`].
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, CalendarError> {
        if !(1..=i64::from(MONTHS_PER_YEAR)).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(1..=i64::from(DAYS_PER_MONTH)).contains(&day) {
            return Err(CalendarError::InvalidDay { day });
        }
        Ok(Self::from_parts(year, month as u8, day as u8))
    }

    /// Creates a date by forcing each field into the range an editor accepts:
    /// year at least 1, month 1..=12, day 1..=30.
    pub fn clamped(year: i64, month: i64, day: i64) -> Self {
        Self::from_parts(
            year.max(1),
            month.clamp(1, i64::from(MONTHS_PER_YEAR)) as u8,
            day.clamp(1, i64::from(DAYS_PER_MONTH)) as u8,
        )
    }

    pub(crate) fn from_parts(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of the eight-day week.
    pub fn weekday(self) -> Weekday {
        // In range for any i64 year: |year * 360| < i128::MAX and the
        // remainder is taken before narrowing.
        let days = self.days_since_epoch().rem_euclid(i128::from(DAYS_PER_WEEK));
        Weekday::from_index(days as i64)
    }

    /// Returns the Vana'diel day count since 886-01-01 (negative before it).
    pub fn days_since_epoch(self) -> i128 {
        vana_days_since_epoch(self.year, i64::from(self.month), i64::from(self.day))
    }

    /// Returns the Earth day count for rotation lookups.
    pub fn day_count(self) -> EarthDayCount {
        vana_to_earth_day_count(self.year, i64::from(self.month), i64::from(self.day))
    }

    /// Returns the Earth instant at which this date begins, if representable.
    pub fn earth_instant(self) -> Option<EarthInstant> {
        earth_instant_for_date(self.year, i64::from(self.month), i64::from(self.day))
    }
}

/// Formats as `YYYY/MM/DD`.
impl fmt::Display for VanaDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Parses `YEAR-MM-DD` or `YEAR/MM/DD` and validates month and day.
impl FromStr for VanaDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bad_format = || CalendarError::InvalidDateFormat {
            input: trimmed.to_string(),
        };
        // Split from the right so a leading minus sign stays with the year.
        let mut parts = trimmed.rsplitn(3, ['-', '/']);
        let day = parts.next().ok_or_else(bad_format)?;
        let month = parts.next().ok_or_else(bad_format)?;
        let year = parts.next().ok_or_else(bad_format)?;
        let parse = |field: &str| field.parse::<i64>().map_err(|_| bad_format());
        Self::new(parse(year)?, parse(month)?, parse(day)?)
    }
}
