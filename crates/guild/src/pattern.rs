//! Guild point patterns A..=H.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GuildError;

/// One of the eight guild point patterns, stored as 0..=7 and shown as A..=H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Pattern(u8);

impl Pattern {
    /// Number of distinct patterns.
    pub const COUNT: u8 = 8;

    /// Creates a pattern from its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`GuildError::InvalidPattern`] if `id` is not in 0..=7.
    pub fn new(id: u8) -> Result<Self, GuildError> {
        if id >= Self::COUNT {
            return Err(GuildError::InvalidPattern {
                input: id.to_string(),
            });
        }
        Ok(Self(id))
    }

    /// Returns the numeric id (0..=7).
    pub fn id(self) -> u8 {
        self.0
    }

    /// Returns the letter label, `'A'` for pattern 0.
    pub fn letter(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Accepts a digit `0`..`7` or a letter `A`..`H` (either case).
impl FromStr for Pattern {
    type Err = GuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || GuildError::InvalidPattern {
            input: trimmed.to_string(),
        };
        if let Ok(id) = trimmed.parse::<u8>() {
            return Self::new(id).map_err(|_| invalid());
        }
        match trimmed.as_bytes() {
            [c @ b'A'..=b'H'] => Ok(Self(c - b'A')),
            [c @ b'a'..=b'h'] => Ok(Self(c - b'a')),
            _ => Err(invalid()),
        }
    }
}
