//! Rotation index for repeating schedules.

use std::num::NonZeroU32;

/// Returns the position of `earth_days` within a cycle of length `period`.
///
/// The result is always in `0..period`, including for negative day counts
/// (dates before the epoch), which wrap backwards from the end of the
/// cycle.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU32;
/// use vana_calendar::rotation_index;
///
/// let period = NonZeroU32::new(4).unwrap();
/// assert_eq!(rotation_index(10, period), 2);
/// assert_eq!(rotation_index(-1, period), 3);
/// ```
pub fn rotation_index(earth_days: i128, period: NonZeroU32) -> u32 {
    // rem_euclid by a positive divisor is in 0..period, which fits u32.
    earth_days.rem_euclid(i128::from(period.get())) as u32
}
