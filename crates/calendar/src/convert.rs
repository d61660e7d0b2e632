//! Earth instant to Vana'diel date and time.

use crate::datetime::VanaDateTime;
use crate::earth::{EPOCH_MS, EarthInstant};
use crate::weekday::Weekday;

/// Vana'diel seconds that pass per Earth second.
pub const TIME_RATE: i64 = 25;

/// Vana'diel year at the epoch.
pub const EPOCH_YEAR: i64 = 886;

/// Earth milliseconds per Vana'diel day: 86_400_000 / 25, exact.
pub const EARTH_MS_PER_VANA_DAY: i64 = 3_456_000;

const SECOND_MS: i128 = 1000;
const MINUTE_MS: i128 = 60 * SECOND_MS;
const HOUR_MS: i128 = 60 * MINUTE_MS;
const DAY_MS: i128 = 24 * HOUR_MS;
const MONTH_MS: i128 = 30 * DAY_MS;
const YEAR_MS: i128 = 360 * DAY_MS;

/// Converts an Earth instant to the Vana'diel date and time.
///
/// Elapsed Earth milliseconds since [`EPOCH_MS`] are multiplied by
/// [`TIME_RATE`] and decomposed into fixed-length years, months, days,
/// hours, minutes and seconds with floor division. Instants before the
/// epoch therefore land in year 885 or earlier with every other field in
/// its normal range. The weekday follows the total day count.
///
/// Total over all `i64` inputs; the arithmetic runs in `i128`.
///
/// # Examples
///
/// ```
/// use vana_calendar::{EarthInstant, Weekday, earth_to_vana};
///
/// let vana = earth_to_vana(EarthInstant::EPOCH);
/// assert_eq!((vana.year(), vana.month(), vana.day()), (886, 1, 1));
/// assert_eq!(vana.weekday(), Weekday::Firesday);
///
/// let later = earth_to_vana(EarthInstant::from_millis(EarthInstant::EPOCH.millis() + 1000));
/// assert_eq!(later.second(), 25);
/// ```
pub fn earth_to_vana(instant: EarthInstant) -> VanaDateTime {
    let elapsed =
        (i128::from(instant.millis()) - i128::from(EPOCH_MS)) * i128::from(TIME_RATE);

    let years = elapsed.div_euclid(YEAR_MS);
    let rest = elapsed.rem_euclid(YEAR_MS);
    // `rest` is non-negative from here on.
    let month = rest / MONTH_MS;
    let rest = rest % MONTH_MS;
    let day = rest / DAY_MS;
    let rest = rest % DAY_MS;
    let hour = rest / HOUR_MS;
    let rest = rest % HOUR_MS;
    let minute = rest / MINUTE_MS;
    let rest = rest % MINUTE_MS;
    let second = rest / SECOND_MS;

    // |elapsed| < 2^68, so both quotients fit in i64.
    let total_days = elapsed.div_euclid(DAY_MS) as i64;

    VanaDateTime::from_parts(
        EPOCH_YEAR + years as i64,
        month as u8 + 1,
        day as u8 + 1,
        hour as u8,
        minute as u8,
        second as u8,
        Weekday::from_index(total_days),
    )
}
