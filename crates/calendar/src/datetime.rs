//! Full Vana'diel date and time of day.

use std::fmt;

use serde::Serialize;

use crate::date::VanaDate;
use crate::weekday::Weekday;

/// A Vana'diel date with time of day, as produced by [`earth_to_vana`].
///
/// Months always have 30 days and years 360; the weekday follows the
/// total day count since the epoch, not the day of month.
///
/// [`earth_to_vana`]: crate::earth_to_vana
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VanaDateTime {
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    weekday: Weekday,
}

impl PartialOrd for VanaDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VanaDateTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
            .cmp(&(
                other.year,
                other.month,
                other.day,
                other.hour,
                other.minute,
                other.second,
            ))
    }
}

impl VanaDateTime {
    /// Assembles a value whose fields were produced by the decomposition
    /// in [`crate::convert`], which keeps every field in range.
    pub(crate) fn from_parts(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        weekday: Weekday,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday,
        }
    }

    /// Returns the year (886 at the epoch).
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

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the day of the eight-day week.
    pub fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Drops the time of day.
    pub fn date(self) -> VanaDate {
        VanaDate::from_parts(self.year, self.month, self.day)
    }
}

/// Formats as `YYYY/MM/DD HH:MM:SS Weekday`.
impl fmt::Display for VanaDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02} {}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.weekday
        )
    }
}
