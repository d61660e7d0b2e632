//! The eight-day Vana'diel week.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Number of days in a Vana'diel week.
pub const DAYS_PER_WEEK: i64 = 8;

/// A day of the eight-day Vana'diel week.
///
/// The cycle runs independently of month and year boundaries; day 0 of
/// the calendar (886-01-01) is a Firesday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Firesday,
    Earthsday,
    Watersday,
    Windsday,
    Iceday,
    Lightningday,
    Lightsday,
    Darksday,
}

impl Weekday {
    /// All weekdays in cycle order, starting at index 0.
    pub const ALL: [Weekday; 8] = [
        Weekday::Firesday,
        Weekday::Earthsday,
        Weekday::Watersday,
        Weekday::Windsday,
        Weekday::Iceday,
        Weekday::Lightningday,
        Weekday::Lightsday,
        Weekday::Darksday,
    ];

    /// Returns the weekday for a day count since the calendar epoch.
    ///
    /// Negative counts wrap backwards, so day -1 is a Darksday.
    pub fn from_index(days_since_epoch: i64) -> Self {
        Self::ALL[days_since_epoch.rem_euclid(DAYS_PER_WEEK) as usize]
    }

    /// Returns the position in the cycle (0..=7).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name, e.g. `"Lightningday"`.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Firesday => "Firesday",
            Weekday::Earthsday => "Earthsday",
            Weekday::Watersday => "Watersday",
            Weekday::Windsday => "Windsday",
            Weekday::Iceday => "Iceday",
            Weekday::Lightningday => "Lightningday",
            Weekday::Lightsday => "Lightsday",
            Weekday::Darksday => "Darksday",
        }
    }

    /// Returns the following day, wrapping Darksday to Firesday.
    pub fn next(self) -> Self {
        Self::from_index(i64::from(self.index()) + 1)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalendarError::UnknownWeekday {
                name: trimmed.to_string(),
            })
    }
}
