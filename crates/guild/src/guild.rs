//! The nine crafting guilds.

use std::fmt;

use serde::Serialize;

use crate::error::GuildError;

/// A crafting guild, identified in the dataset by ids 0..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Guild {
    Fishing,
    Woodworking,
    Smithing,
    Goldsmithing,
    Clothcraft,
    Leathercraft,
    Bonecraft,
    Alchemy,
    Cooking,
}

impl Guild {
    /// All guilds in id order.
    pub const ALL: [Guild; 9] = [
        Guild::Fishing,
        Guild::Woodworking,
        Guild::Smithing,
        Guild::Goldsmithing,
        Guild::Clothcraft,
        Guild::Leathercraft,
        Guild::Bonecraft,
        Guild::Alchemy,
        Guild::Cooking,
    ];

    /// Looks up a guild by dataset id.
    ///
    /// # Errors
    ///
    /// Returns [`GuildError::InvalidGuild`] if `id` is not in 0..=8.
    pub fn from_id(id: u32) -> Result<Self, GuildError> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(GuildError::InvalidGuild { id })
    }

    /// Returns the dataset id (0..=8).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            Guild::Fishing => "Fishing",
            Guild::Woodworking => "Woodworking",
            Guild::Smithing => "Smithing",
            Guild::Goldsmithing => "Goldsmithing",
            Guild::Clothcraft => "Clothcraft",
            Guild::Leathercraft => "Leathercraft",
            Guild::Bonecraft => "Bonecraft",
            Guild::Alchemy => "Alchemy",
            Guild::Cooking => "Cooking",
        }
    }
}

impl fmt::Display for Guild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
