//! Guild point dataset: guild id -> pattern id -> rotation day -> items.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GuildError;
use crate::guild::Guild;
use crate::item::GuildItem;
use crate::pattern::Pattern;

type RotationData = BTreeMap<u32, Vec<GuildItem>>;
type PatternData = BTreeMap<u8, RotationData>;

/// The guild point item dataset.
///
/// The JSON form is an object keyed by guild id, then pattern id, then
/// rotation day, each as a decimal string:
///
/// ```json
/// { "0": { "1": { "0": [ { "id": 101, "name": "Carp", "points": 100, "max": 1000 } ] } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildData(BTreeMap<u8, PatternData>);

impl GuildData {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`GuildError::Parse`] if the JSON does not have the dataset shape.
    pub fn from_json_str(json: &str) -> Result<Self, GuildError> {
        serde_json::from_str(json).map_err(|e| GuildError::Parse {
            reason: e.to_string(),
        })
    }

    /// Parses a dataset from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns [`GuildError::Parse`] if the JSON does not have the dataset shape.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GuildError> {
        serde_json::from_reader(reader).map_err(|e| GuildError::Parse {
            reason: e.to_string(),
        })
    }

    /// Reads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`GuildError::Io`] if the file cannot be opened and
    /// [`GuildError::Parse`] if its contents are not a valid dataset.
    pub fn from_path(path: &Path) -> Result<Self, GuildError> {
        let file = File::open(path).map_err(|e| GuildError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let data = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), n_guilds = data.n_guilds(), "guild data loaded");
        Ok(data)
    }

    /// Adds items for one guild, pattern and rotation day, appending to any
    /// already present.
    pub fn insert(
        &mut self,
        guild: Guild,
        pattern: Pattern,
        rotation_day: u32,
        items: impl IntoIterator<Item = GuildItem>,
    ) {
        self.0
            .entry(guild.id())
            .or_default()
            .entry(pattern.id())
            .or_default()
            .entry(rotation_day)
            .or_default()
            .extend(items);
    }

    /// Returns the items for a guild, pattern and rotation day.
    ///
    /// Missing keys at any level yield an empty slice.
    pub fn items(&self, guild: Guild, pattern: Pattern, rotation_day: u32) -> &[GuildItem] {
        self.rotation(guild, pattern)
            .and_then(|days| days.get(&rotation_day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if the dataset has any entry for this guild and pattern.
    pub fn has_pattern(&self, guild: Guild, pattern: Pattern) -> bool {
        self.rotation(guild, pattern).is_some()
    }

    /// Number of guilds with data.
    pub fn n_guilds(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the dataset holds no guilds.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn rotation(&self, guild: Guild, pattern: Pattern) -> Option<&RotationData> {
        self.0.get(&guild.id())?.get(&pattern.id())
    }
}
