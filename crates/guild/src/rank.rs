//! Crafting skill ranks and their rotation periods.

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

use crate::error::GuildError;

/// A crafting skill rank, ids 0..=9.
///
/// Each rank's guild point items rotate over `id + 1` Earth days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SkillRank {
    Amateur,
    Recruit,
    Initiate,
    Novice,
    Apprentice,
    Journeyman,
    Craftsman,
    Artisan,
    Adept,
    Veteran,
}

impl SkillRank {
    /// All ranks in id order.
    pub const ALL: [SkillRank; 10] = [
        SkillRank::Amateur,
        SkillRank::Recruit,
        SkillRank::Initiate,
        SkillRank::Novice,
        SkillRank::Apprentice,
        SkillRank::Journeyman,
        SkillRank::Craftsman,
        SkillRank::Artisan,
        SkillRank::Adept,
        SkillRank::Veteran,
    ];

    /// Looks up a rank by id.
    ///
    /// # Errors
    ///
    /// Returns [`GuildError::InvalidRank`] if `id` is not in 0..=9.
    pub fn from_id(id: u32) -> Result<Self, GuildError> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(GuildError::InvalidRank { id })
    }

    /// Returns the rank id (0..=9).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns the length of this rank's item rotation in Earth days.
    pub fn rotation_period(self) -> NonZeroU32 {
        NonZeroU32::MIN.saturating_add(u32::from(self.id()))
    }

    /// Returns the full rank name.
    pub fn name(self) -> &'static str {
        match self {
            SkillRank::Amateur => "Amateur",
            SkillRank::Recruit => "Recruit",
            SkillRank::Initiate => "Initiate",
            SkillRank::Novice => "Novice",
            SkillRank::Apprentice => "Apprentice",
            SkillRank::Journeyman => "Journeyman",
            SkillRank::Craftsman => "Craftsman",
            SkillRank::Artisan => "Artisan",
            SkillRank::Adept => "Adept",
            SkillRank::Veteran => "Veteran",
        }
    }

    /// Returns the abbreviated name for narrow tables.
    pub fn short_name(self) -> &'static str {
        match self {
            SkillRank::Initiate => "Init.",
            SkillRank::Apprentice => "Appr.",
            SkillRank::Journeyman => "Jour.",
            SkillRank::Craftsman => "Craft.",
            SkillRank::Artisan => "Art.",
            SkillRank::Veteran => "Vet.",
            other => other.name(),
        }
    }
}

impl fmt::Display for SkillRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_period_is_id_plus_one() {
        for rank in SkillRank::ALL {
            assert_eq!(rank.rotation_period().get(), u32::from(rank.id()) + 1);
        }
        assert_eq!(SkillRank::Novice.rotation_period().get(), 4);
        assert_eq!(SkillRank::Veteran.rotation_period().get(), 10);
    }

    #[test]
    fn from_id() {
        assert_eq!(SkillRank::from_id(3).unwrap(), SkillRank::Novice);
        assert_eq!(
            SkillRank::from_id(10).unwrap_err(),
            GuildError::InvalidRank { id: 10 }
        );
    }

    #[test]
    fn short_names() {
        assert_eq!(SkillRank::Journeyman.short_name(), "Jour.");
        assert_eq!(SkillRank::Novice.short_name(), "Novice");
        assert_eq!(SkillRank::Adept.short_name(), "Adept");
    }

    #[test]
    fn ordering_follows_id() {
        assert!(SkillRank::Novice < SkillRank::Veteran);
    }
}
