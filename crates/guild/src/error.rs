//! Error types for the vana-guild crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the vana-guild crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GuildError {
    /// Returned when the dataset file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when the dataset is not valid guild JSON.
    #[error("invalid guild data: {reason}")]
    Parse {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Returned when a guild id is outside 0..=8.
    #[error("invalid guild id: {id} (must be 0..=8)")]
    InvalidGuild {
        /// The invalid guild id.
        id: u32,
    },

    /// Returned when a skill rank id is outside 0..=9.
    #[error("invalid rank id: {id} (must be 0..=9)")]
    InvalidRank {
        /// The invalid rank id.
        id: u32,
    },

    /// Returned when a pattern is neither 0..=7 nor a letter A..=H.
    #[error("invalid pattern: {input:?} (must be 0..=7 or A..=H)")]
    InvalidPattern {
        /// The rejected input.
        input: String,
    },
}
