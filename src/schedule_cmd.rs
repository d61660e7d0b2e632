//! Schedule command: active guild point items for a date and pattern.

use std::fmt::Write as _;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use vana_calendar::EarthInstant;
use vana_guild::{GuildData, Schedule, build_schedule};

use crate::cli::ScheduleArgs;
use crate::config::VanaConfig;
use crate::convert;
use crate::share;
use crate::state::CalculatorState;

/// Resolves the calculator state: config, then `--link`, then `--now`,
/// then explicit flags.
fn resolve_state(args: &ScheduleArgs, base: CalculatorState) -> Result<CalculatorState> {
    let mut state = base;
    if let Some(link) = &args.link {
        state = share::decode(link, state).context("failed to decode share link")?;
    }
    if args.now {
        state = state.synced_to(EarthInstant::now());
    }
    let guild = args.guild.map(convert::parse_guild).transpose()?;
    Ok(state.with_overrides(args.date, args.pattern, guild))
}

/// Look up and print the schedule.
pub fn run(args: ScheduleArgs, config: &VanaConfig, base: CalculatorState) -> Result<()> {
    let _cmd = info_span!("schedule").entered();

    let state = resolve_state(&args, base)?;
    let (configured, min_rank) = convert::build_schedule_filter(&config.schedule)?;
    let guilds = match state.guild {
        Some(guild) => vec![guild],
        None => configured,
    };

    let path = args
        .data
        .as_ref()
        .or(config.schedule.data.as_ref())
        .ok_or_else(|| anyhow!("no dataset: set [schedule].data in config or use --data"))?;
    info!(path = %path.display(), "reading guild dataset");
    let data = GuildData::from_path(path)
        .with_context(|| format!("failed to load dataset: {}", path.display()))?;
    info!(n_guilds = data.n_guilds(), "dataset loaded");

    let count = state.day_count();
    let schedule = build_schedule(&data, &guilds, state.pattern, count.earth_days, min_rank);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print!("{}", render(&state, &schedule));
    }
    Ok(())
}

/// Renders the schedule as a plain-text table.
fn render(state: &CalculatorState, schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}  pattern {}  (Earth day {})",
        state.date,
        state.date.weekday(),
        schedule.pattern,
        schedule.earth_days
    );
    for g in &schedule.guilds {
        let _ = writeln!(out, "\n{}", g.guild);
        if !g.available {
            let _ = writeln!(out, "  no data for pattern {}", schedule.pattern);
            continue;
        }
        for row in &g.ranks {
            if row.items.is_empty() {
                let _ = writeln!(out, "  {:<11} No active item", row.rank.name());
                continue;
            }
            for (i, s) in row.items.iter().enumerate() {
                let label = if i == 0 { row.rank.name() } else { "" };
                let _ = writeln!(
                    out,
                    "  {:<11} {:<28} {:>5} pts  x{:<4} (cap {})",
                    label, s.item.name, s.item.points, s.quantity, s.item.max
                );
            }
        }
    }
    out
}
