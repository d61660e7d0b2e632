//! Calculator state passed explicitly into every command.

use vana_calendar::{EarthDayCount, EarthInstant, VanaDate, earth_to_vana};
use vana_guild::{Guild, Pattern};

/// The date, pattern and guild a command works on.
///
/// Built from config, then overridden by share links and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorState {
    pub date: VanaDate,
    pub pattern: Pattern,
    pub guild: Option<Guild>,
}

impl CalculatorState {
    /// Earth day count of the selected date.
    pub fn day_count(&self) -> EarthDayCount {
        self.date.day_count()
    }

    /// Replaces the date with the Vana'diel date at `now`.
    pub fn synced_to(self, now: EarthInstant) -> Self {
        Self {
            date: earth_to_vana(now).date(),
            ..self
        }
    }

    /// Applies whichever overrides are present.
    pub fn with_overrides(
        self,
        date: Option<VanaDate>,
        pattern: Option<Pattern>,
        guild: Option<Guild>,
    ) -> Self {
        Self {
            date: date.unwrap_or(self.date),
            pattern: pattern.unwrap_or(self.pattern),
            guild: guild.or(self.guild),
        }
    }
}
