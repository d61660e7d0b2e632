//! Guild point items.

use serde::{Deserialize, Serialize};

/// An item a guild accepts in exchange for guild points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildItem {
    /// Game item id.
    pub id: u32,
    /// Item name.
    pub name: String,
    /// Points awarded per item delivered.
    pub points: u32,
    /// Point cap for the day.
    pub max: u32,
}

impl GuildItem {
    /// Number of items needed to reach the daily cap, rounded up.
    ///
    /// Returns 0 for an item worth 0 points.
    pub fn quantity(&self) -> u32 {
        if self.points == 0 {
            return 0;
        }
        self.max.div_ceil(self.points)
    }
}
