//! Active guild point items for a given Earth day count.

use serde::Serialize;
use tracing::{debug, trace};
use vana_calendar::rotation_index;

use crate::data::GuildData;
use crate::guild::Guild;
use crate::item::GuildItem;
use crate::pattern::Pattern;
use crate::rank::SkillRank;

/// An item on offer together with the deliveries needed to reach its cap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledItem {
    #[serde(flatten)]
    pub item: GuildItem,
    pub quantity: u32,
}

/// The items one rank sees on the scheduled day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    pub rank: SkillRank,
    /// Position within the rank's rotation, `earth_days mod (rank + 1)`.
    pub rotation_day: u32,
    /// Empty when nothing is on offer for this slot.
    pub items: Vec<ScheduledItem>,
}

/// One guild's rows, lowest rank first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildSchedule {
    pub guild: Guild,
    /// `false` when the dataset has no entry for this guild and pattern.
    pub available: bool,
    pub ranks: Vec<RankRow>,
}

/// Schedule for every requested guild on one Earth day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub earth_days: i128,
    pub pattern: Pattern,
    pub guilds: Vec<GuildSchedule>,
}

/// Builds the schedule of active items for the given Earth day count.
///
/// For each guild and each rank from `min_rank` up to Veteran, the
/// rotation day is `rotation_index(earth_days, rank.rotation_period())`
/// and the row lists the dataset items stored under that day.
#[tracing::instrument(skip(data, guilds), fields(n_guilds = guilds.len()))]
pub fn build_schedule(
    data: &GuildData,
    guilds: &[Guild],
    pattern: Pattern,
    earth_days: i128,
    min_rank: SkillRank,
) -> Schedule {
    let ranks: Vec<SkillRank> = SkillRank::ALL
        .into_iter()
        .filter(|r| *r >= min_rank)
        .collect();

    let guilds = guilds
        .iter()
        .map(|&guild| {
            let available = data.has_pattern(guild, pattern);
            if !available {
                debug!(guild = guild.name(), %pattern, "no data for pattern");
            }
            let rows = ranks
                .iter()
                .map(|&rank| {
                    let rotation_day = rotation_index(earth_days, rank.rotation_period());
                    let items: Vec<ScheduledItem> = data
                        .items(guild, pattern, rotation_day)
                        .iter()
                        .map(|item| ScheduledItem {
                            quantity: item.quantity(),
                            item: item.clone(),
                        })
                        .collect();
                    trace!(guild = guild.name(), rank = rank.name(), rotation_day, n_items = items.len());
                    RankRow {
                        rank,
                        rotation_day,
                        items,
                    }
                })
                .collect();
            GuildSchedule {
                guild,
                available,
                ranks: rows,
            }
        })
        .collect();

    Schedule {
        earth_days,
        pattern,
        guilds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str) -> GuildItem {
        GuildItem {
            id,
            name: name.to_string(),
            points: 100,
            max: 1000,
        }
    }

    fn pattern() -> Pattern {
        Pattern::new(1).unwrap()
    }

    #[test]
    fn rows_cover_min_rank_to_veteran() {
        let data = GuildData::new();
        let schedule = build_schedule(&data, &[Guild::Fishing], pattern(), 0, SkillRank::Novice);
        let ranks: Vec<SkillRank> = schedule.guilds[0].ranks.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, SkillRank::ALL[3..].to_vec());
    }

    #[test]
    fn rotation_day_per_rank() {
        let data = GuildData::new();
        let schedule = build_schedule(&data, &[Guild::Fishing], pattern(), 13, SkillRank::Novice);
        let days: Vec<u32> = schedule.guilds[0]
            .ranks
            .iter()
            .map(|r| r.rotation_day)
            .collect();
        // 13 mod 4, 5, 6, 7, 8, 9, 10
        assert_eq!(days, vec![1, 3, 1, 6, 5, 4, 3]);
    }

    #[test]
    fn items_come_from_rotation_day() {
        let mut data = GuildData::new();
        data.insert(Guild::Fishing, pattern(), 0, [item(101, "Carp")]);
        data.insert(Guild::Fishing, pattern(), 1, [item(102, "Bass")]);
        let schedule = build_schedule(&data, &[Guild::Fishing], pattern(), 8, SkillRank::Novice);
        let novice = &schedule.guilds[0].ranks[0];
        // 8 mod 4 = 0
        assert_eq!(novice.items.len(), 1);
        assert_eq!(novice.items[0].item.name, "Carp");
        assert_eq!(novice.items[0].quantity, 10);
        let craftsman = &schedule.guilds[0].ranks[3];
        // 8 mod 7 = 1
        assert_eq!(craftsman.rank, SkillRank::Craftsman);
        assert_eq!(craftsman.items[0].item.name, "Bass");
    }

    #[test]
    fn missing_pattern_marks_unavailable() {
        let mut data = GuildData::new();
        data.insert(Guild::Fishing, pattern(), 0, [item(101, "Carp")]);
        let schedule = build_schedule(
            &data,
            &[Guild::Fishing, Guild::Cooking],
            pattern(),
            0,
            SkillRank::Veteran,
        );
        assert!(schedule.guilds[0].available);
        assert!(!schedule.guilds[1].available);
        assert!(schedule.guilds[1].ranks[0].items.is_empty());
    }

    #[test]
    fn negative_day_count_uses_wrapped_slot() {
        let mut data = GuildData::new();
        data.insert(Guild::Fishing, pattern(), 3, [item(101, "Carp")]);
        let schedule = build_schedule(&data, &[Guild::Fishing], pattern(), -1, SkillRank::Novice);
        let novice = &schedule.guilds[0].ranks[0];
        assert_eq!(novice.rotation_day, 3);
        assert_eq!(novice.items.len(), 1);
    }

    #[test]
    fn serializes_flattened_items() {
        let mut data = GuildData::new();
        data.insert(Guild::Fishing, pattern(), 0, [item(101, "Carp")]);
        let schedule = build_schedule(&data, &[Guild::Fishing], pattern(), 0, SkillRank::Veteran);
        let json = serde_json::to_value(&schedule).unwrap();
        let first = &json["guilds"][0]["ranks"][0]["items"][0];
        assert_eq!(first["name"], "Carp");
        assert_eq!(first["quantity"], 10);
        assert_eq!(json["guilds"][0]["guild"], "Fishing");
        assert_eq!(json["pattern"], 1);
    }
}
