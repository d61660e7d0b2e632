//! Vana'diel date to Earth day count, the inverse of the day part of
//! [`earth_to_vana`](crate::earth_to_vana).

use serde::Serialize;

use crate::convert::{EARTH_MS_PER_VANA_DAY, EPOCH_YEAR, TIME_RATE};
use crate::date::DAYS_PER_MONTH;
use crate::earth::{EPOCH_MS, EarthInstant};

/// Days in a Vana'diel year (12 months of 30 days).
pub const DAYS_PER_YEAR: i64 = 360;

/// Day counts for a Vana'diel date, relative to the calendar epoch.
///
/// Both values are `i128` so that no combination of `i64` inputs can
/// overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EarthDayCount {
    /// Whole Earth days elapsed since the epoch, floored.
    pub earth_days: i128,
    /// Vana'diel days elapsed since 886-01-01.
    pub vana_days_since_epoch: i128,
}

/// Vana'diel days between 886-01-01 and the given date.
///
/// No range checks: a month of 13 or a day of 31 simply spills into the
/// following month or year.
pub fn vana_days_since_epoch(year: i64, month: i64, day: i64) -> i128 {
    (i128::from(year) - i128::from(EPOCH_YEAR)) * i128::from(DAYS_PER_YEAR)
        + (i128::from(month) - 1) * i128::from(DAYS_PER_MONTH)
        + (i128::from(day) - 1)
}

/// Converts a Vana'diel date into the number of Earth days since the epoch.
///
/// Twenty-five Vana'diel days pass per Earth day, so the count is
/// `floor(vana_days / 25)`. Dates before the epoch give negative counts
/// rounded towards negative infinity. Inputs are not validated.
///
/// # Examples
///
/// ```
/// use vana_calendar::vana_to_earth_day_count;
///
/// let count = vana_to_earth_day_count(886, 1, 26);
/// assert_eq!(count.earth_days, 1);
/// assert_eq!(count.vana_days_since_epoch, 25);
/// ```
pub fn vana_to_earth_day_count(year: i64, month: i64, day: i64) -> EarthDayCount {
    let vana_days = vana_days_since_epoch(year, month, day);
    EarthDayCount {
        earth_days: vana_days.div_euclid(i128::from(TIME_RATE)),
        vana_days_since_epoch: vana_days,
    }
}

/// Returns the Earth instant at which the given Vana'diel date begins.
///
/// This is `EPOCH_MS + vana_days * 86_400_000 / 25`; the quotient is exact
/// so no rounding occurs. Returns `None` when the result is outside the
/// `i64` millisecond range.
pub fn earth_instant_for_date(year: i64, month: i64, day: i64) -> Option<EarthInstant> {
    let ms = i128::from(EPOCH_MS)
        + vana_days_since_epoch(year, month, day) * i128::from(EARTH_MS_PER_VANA_DAY);
    i64::try_from(ms).ok().map(EarthInstant::from_millis)
}
