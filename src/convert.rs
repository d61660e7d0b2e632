//! Pure conversion functions: TOML config structs -> library types.

use std::time::Duration;

use anyhow::{Result, bail};
use tracing::warn;

use vana_calendar::VanaDate;
use vana_guild::{Guild, Pattern, SkillRank};

use crate::config::{CalculatorToml, ClockToml, ScheduleToml};
use crate::state::CalculatorState;

/// Converts a numeric pattern id into a [`Pattern`].
pub fn parse_pattern(id: u8) -> Result<Pattern> {
    Ok(Pattern::new(id)?)
}

/// Converts a numeric guild id into a [`Guild`].
pub fn parse_guild(id: u32) -> Result<Guild> {
    Ok(Guild::from_id(id)?)
}

/// Converts a numeric rank id into a [`SkillRank`].
pub fn parse_rank(id: u32) -> Result<SkillRank> {
    Ok(SkillRank::from_id(id)?)
}

/// Converts the configured guild list, rejecting an empty list.
pub fn parse_guilds(ids: &[u32]) -> Result<Vec<Guild>> {
    if ids.is_empty() {
        bail!("[schedule].guilds must list at least one guild id");
    }
    ids.iter().map(|&id| parse_guild(id)).collect()
}

/// Builds the initial [`CalculatorState`] from the TOML calculator section.
///
/// Out-of-range date fields are clamped the same way a date editor would
/// (year at least 1, month 1..=12, day 1..=30), with a warning.
pub fn build_calculator_state(calc: &CalculatorToml) -> Result<CalculatorState> {
    let date = VanaDate::clamped(calc.year, calc.month, calc.day);
    if (date.year(), i64::from(date.month()), i64::from(date.day()))
        != (calc.year, calc.month, calc.day)
    {
        warn!(
            year = calc.year,
            month = calc.month,
            day = calc.day,
            clamped = %date,
            "calculator date out of range, clamped"
        );
    }
    Ok(CalculatorState {
        date,
        pattern: parse_pattern(calc.pattern)?,
        guild: None,
    })
}

/// Builds the guild list and lowest listed rank for schedule lookups.
pub fn build_schedule_filter(schedule: &ScheduleToml) -> Result<(Vec<Guild>, SkillRank)> {
    Ok((parse_guilds(&schedule.guilds)?, parse_rank(schedule.min_rank)?))
}

/// Builds the live clock refresh interval.
pub fn build_tick_interval(clock: &ClockToml) -> Result<Duration> {
    if clock.tick_ms == 0 {
        bail!("[clock].tick_ms must be at least 1");
    }
    Ok(Duration::from_millis(clock.tick_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calculator_state() {
        let state = build_calculator_state(&CalculatorToml::default()).unwrap();
        assert_eq!(state.date, VanaDate::new(1495, 3, 13).unwrap());
        assert_eq!(state.pattern.id(), 1);
        assert_eq!(state.guild, None);
    }

    #[test]
    fn calculator_date_is_clamped() {
        let calc = CalculatorToml {
            year: 0,
            month: 13,
            day: 31,
            pattern: 0,
        };
        let state = build_calculator_state(&calc).unwrap();
        assert_eq!(state.date, VanaDate::new(1, 12, 30).unwrap());
    }

    #[test]
    fn calculator_pattern_out_of_range() {
        let calc = CalculatorToml {
            pattern: 8,
            ..CalculatorToml::default()
        };
        assert!(build_calculator_state(&calc).is_err());
    }

    #[test]
    fn guild_list() {
        assert_eq!(
            parse_guilds(&[0, 8]).unwrap(),
            vec![Guild::Fishing, Guild::Cooking]
        );
        assert!(parse_guilds(&[]).is_err());
        assert!(parse_guilds(&[9]).is_err());
    }

    #[test]
    fn schedule_filter_defaults() {
        let (guilds, rank) = build_schedule_filter(&ScheduleToml::default()).unwrap();
        assert_eq!(guilds.len(), 9);
        assert_eq!(rank, SkillRank::Novice);
    }

    #[test]
    fn tick_interval() {
        let tick = build_tick_interval(&ClockToml::default()).unwrap();
        assert_eq!(tick, Duration::from_millis(40));
        assert!(build_tick_interval(&ClockToml { tick_ms: 0 }).is_err());
    }
}
