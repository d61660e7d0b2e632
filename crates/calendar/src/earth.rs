//! Earth instants as signed milliseconds since the Unix epoch.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Earth instant of Vana'diel 886-01-01 00:00:00.
///
/// Midnight 2002-01-01 in UTC+9, i.e. 2001-12-31T15:00:00Z.
pub const EPOCH_MS: i64 = 1_009_810_800_000;

/// A point in Earth time, in milliseconds since 1970-01-01T00:00:00Z.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EarthInstant(i64);

impl EarthInstant {
    /// The instant the Vana'diel calendar starts.
    pub const EPOCH: Self = Self(EPOCH_MS);

    /// Creates an instant from milliseconds since the Unix epoch.
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    /// Reads the system wall clock.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Returns milliseconds since the Unix epoch.
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Converts to a UTC date-time, or `None` if chrono cannot represent it.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl From<DateTime<Utc>> for EarthInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl fmt::Display for EarthInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// Parses either an integer millisecond count or an RFC 3339 timestamp.
impl FromStr for EarthInstant {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(ms) = s.parse::<i64>() {
            return Ok(Self(ms));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from(dt.with_timezone(&Utc)))
            .map_err(|_| CalendarError::InvalidInstant {
                input: s.to_string(),
            })
    }
}
