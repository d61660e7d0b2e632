//! # vana-calendar
//!
//! Pure arithmetic between Earth time and the Vana'diel calendar.
//!
//! Vana'diel time runs 25 times faster than Earth time. Its calendar has
//! twelve 30-day months, 360-day years and an eight-day week, starting at
//! 886-01-01 00:00:00 (Firesday) on 2001-12-31T15:00:00Z.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["EarthInstant (ms)"] -->|"earth_to_vana()"| B["VanaDateTime"]
//!     B -->|".date()"| C["VanaDate"]
//!     C -->|"vana_to_earth_day_count()"| D["EarthDayCount"]
//!     D -->|"rotation_index()"| E["0..period"]
//!     C -->|"earth_instant_for_date()"| A
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::num::NonZeroU32;
//! use vana_calendar::{EarthInstant, VanaDate, earth_to_vana, rotation_index};
//!
//! // Earth -> Vana'diel
//! let now = earth_to_vana(EarthInstant::EPOCH);
//! assert_eq!(now.to_string(), "0886/01/01 00:00:00 Firesday");
//!
//! // Vana'diel date -> Earth day count -> rotation slot
//! let date: VanaDate = "886-01-26".parse().unwrap();
//! let count = date.day_count();
//! assert_eq!(count.earth_days, 1);
//! assert_eq!(rotation_index(count.earth_days, NonZeroU32::new(4).unwrap()), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `earth` | Earth instant newtype and the epoch anchor |
//! | `convert` | Earth instant to Vana'diel date/time |
//! | `day_count` | Vana'diel date to Earth day count and back to an instant |
//! | `rotation` | Non-negative rotation index |
//! | `datetime` | Vana'diel date with time of day |
//! | `date` | Vana'diel date, validated or clamped |
//! | `weekday` | Eight-day week |
//! | `error` | Error types |

mod convert;
mod date;
mod datetime;
mod day_count;
mod earth;
mod error;
mod rotation;
mod weekday;

pub use convert::{EARTH_MS_PER_VANA_DAY, EPOCH_YEAR, TIME_RATE, earth_to_vana};
pub use date::{DAYS_PER_MONTH, MONTHS_PER_YEAR, VanaDate};
pub use datetime::VanaDateTime;
pub use day_count::{
    DAYS_PER_YEAR, EarthDayCount, earth_instant_for_date, vana_days_since_epoch,
    vana_to_earth_day_count,
};
pub use earth::{EPOCH_MS, EarthInstant};
pub use error::CalendarError;
pub use rotation::rotation_index;
pub use weekday::{DAYS_PER_WEEK, Weekday};
