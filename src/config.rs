use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "vana.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct VanaConfig {
    /// Initial calculator state.
    #[serde(default)]
    pub calculator: CalculatorToml,

    /// Schedule lookup settings.
    #[serde(default)]
    pub schedule: ScheduleToml,

    /// Live clock settings.
    #[serde(default)]
    pub clock: ClockToml,
}

impl VanaConfig {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG`] if it
    /// exists, or falls back to built-in defaults.
    ///
    /// An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorToml {
    #[serde(default = "default_year")]
    pub year: i64,
    #[serde(default = "default_month")]
    pub month: i64,
    #[serde(default = "default_day")]
    pub day: i64,
    #[serde(default = "default_pattern")]
    pub pattern: u8,
}

impl Default for CalculatorToml {
    fn default() -> Self {
        Self {
            year: default_year(),
            month: default_month(),
            day: default_day(),
            pattern: default_pattern(),
        }
    }
}

fn default_year() -> i64 {
    1495
}
fn default_month() -> i64 {
    3
}
fn default_day() -> i64 {
    13
}
fn default_pattern() -> u8 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default)]
    pub data: Option<PathBuf>,
    #[serde(default = "default_guilds")]
    pub guilds: Vec<u32>,
    #[serde(default = "default_min_rank")]
    pub min_rank: u32,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            data: None,
            guilds: default_guilds(),
            min_rank: default_min_rank(),
        }
    }
}

fn default_guilds() -> Vec<u32> {
    (0..=8).collect()
}
fn default_min_rank() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for ClockToml {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

/// 40 Earth ms is one Vana'diel second.
fn default_tick_ms() -> u64 {
    40
}
