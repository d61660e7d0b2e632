//! # vana-guild
//!
//! Guild point item lookup on top of the Vana'diel calendar.
//!
//! Each crafting guild offers items that rotate daily. A rank's rotation
//! is `rank id + 1` Earth days long, and the slot for a given day is the
//! Earth day count modulo that length. The item dataset itself is an
//! external JSON file keyed by guild, pattern and rotation day.
//!
//! ## Quick Start
//!
//! ```
//! use vana_calendar::VanaDate;
//! use vana_guild::{Guild, GuildData, Pattern, SkillRank, build_schedule};
//!
//! let data = GuildData::from_json_str(
//!     r#"{"0": {"1": {"0": [{"id": 101, "name": "Carp", "points": 100, "max": 1000}]}}}"#,
//! ).unwrap();
//! let date: VanaDate = "886-01-01".parse().unwrap();
//! let schedule = build_schedule(
//!     &data,
//!     &[Guild::Fishing],
//!     Pattern::new(1).unwrap(),
//!     date.day_count().earth_days,
//!     SkillRank::Novice,
//! );
//! assert_eq!(schedule.guilds[0].ranks[0].items[0].item.name, "Carp");
//! ```

mod data;
mod error;
mod guild;
mod item;
mod pattern;
mod rank;
mod schedule;

pub use data::GuildData;
pub use error::GuildError;
pub use guild::Guild;
pub use item::GuildItem;
pub use pattern::Pattern;
pub use rank::SkillRank;
pub use schedule::{GuildSchedule, RankRow, Schedule, ScheduledItem, build_schedule};
