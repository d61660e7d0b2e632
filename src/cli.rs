use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vana_calendar::{EarthInstant, VanaDate};
use vana_guild::Pattern;

/// Vana'diel clock and guild point calculator.
#[derive(Parser)]
#[command(
    name = "vana",
    version,
    about = "Vana'diel clock and guild point calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: vana.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the current (or a given) Vana'diel date and time.
    Now(NowArgs),
    /// Convert a Vana'diel date into Earth day counts and a rotation slot.
    Days(DaysArgs),
    /// List the active guild point items for a date and pattern.
    Schedule(ScheduleArgs),
    /// Print a shareable query string for a date, pattern and guild.
    Share(ShareArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// Earth instant to convert, as epoch milliseconds or RFC 3339.
    #[arg(long, conflicts_with = "watch")]
    pub at: Option<EarthInstant>,

    /// Keep refreshing the clock every `[clock].tick_ms` milliseconds.
    #[arg(short, long)]
    pub watch: bool,

    /// Stop watching after this many refreshes.
    #[arg(long, requires = "watch")]
    pub ticks: Option<u64>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `days` subcommand.
#[derive(clap::Args)]
pub struct DaysArgs {
    /// Vana'diel date (YEAR-MM-DD); defaults to the configured calculator date.
    pub date: Option<VanaDate>,

    /// Also report the slot within a rotation of this many Earth days.
    #[arg(long)]
    pub period: Option<NonZeroU32>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Vana'diel date (YEAR-MM-DD).
    #[arg(short, long)]
    pub date: Option<VanaDate>,

    /// Restore date, pattern and guild from a share query string.
    #[arg(long, conflicts_with = "date")]
    pub link: Option<String>,

    /// Use the current Vana'diel date.
    #[arg(long, conflicts_with_all = ["date", "link"])]
    pub now: bool,

    /// Pattern, 0..=7 or A..=H.
    #[arg(short, long)]
    pub pattern: Option<Pattern>,

    /// Only show this guild id (0..=8).
    #[arg(short, long)]
    pub guild: Option<u32>,

    /// Override the dataset path from config.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `share` subcommand.
#[derive(clap::Args)]
pub struct ShareArgs {
    /// Vana'diel date (YEAR-MM-DD).
    #[arg(short, long)]
    pub date: Option<VanaDate>,

    /// Pattern, 0..=7 or A..=H.
    #[arg(short, long)]
    pub pattern: Option<Pattern>,

    /// Guild id (0..=8) to scroll to.
    #[arg(short, long)]
    pub guild: Option<u32>,

    /// Prefix the query string with this base URL.
    #[arg(long)]
    pub url: Option<String>,
}
