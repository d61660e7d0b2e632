//! Now command: live Vana'diel clock.

use std::io::{self, Write};
use std::thread;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use vana_calendar::{EarthInstant, VanaDateTime, earth_to_vana};

use crate::cli::NowArgs;
use crate::config::VanaConfig;
use crate::convert;

/// One clock reading, as emitted in JSON mode.
#[derive(Debug, Serialize)]
struct ClockReading {
    earth_ms: i64,
    earth: String,
    vana: VanaDateTime,
    display: String,
}

impl ClockReading {
    fn at(instant: EarthInstant) -> Self {
        let vana = earth_to_vana(instant);
        Self {
            earth_ms: instant.millis(),
            earth: instant.to_string(),
            display: vana.to_string(),
            vana,
        }
    }
}

/// Print the Vana'diel time once, or keep redrawing it with `--watch`.
pub fn run(args: NowArgs, config: &VanaConfig) -> Result<()> {
    let _cmd = info_span!("now").entered();

    if !args.watch {
        let instant = args.at.unwrap_or_else(EarthInstant::now);
        let reading = ClockReading::at(instant);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&reading)?);
        } else {
            println!("{}", reading.display);
        }
        return Ok(());
    }

    let tick = convert::build_tick_interval(&config.clock)?;
    info!(tick_ms = tick.as_millis() as u64, ticks = ?args.ticks, "starting clock");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count: u64 = 0;
    loop {
        let reading = ClockReading::at(EarthInstant::now());
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&reading)?)?;
        } else {
            write!(out, "\r{}", reading.display)?;
        }
        out.flush().context("failed to write clock")?;

        count += 1;
        if args.ticks.is_some_and(|limit| count >= limit) {
            break;
        }
        thread::sleep(tick);
    }
    if !args.json {
        writeln!(out)?;
    }
    debug!(count, "clock stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vana_calendar::EPOCH_MS;

    #[test]
    fn reading_at_epoch() {
        let reading = ClockReading::at(EarthInstant::from_millis(EPOCH_MS));
        assert_eq!(reading.display, "0886/01/01 00:00:00 Firesday");
        assert_eq!(reading.earth, "2001-12-31T15:00:00.000Z");
        assert_eq!(reading.earth_ms, EPOCH_MS);
    }

    #[test]
    fn reading_serializes() {
        let reading = ClockReading::at(EarthInstant::from_millis(EPOCH_MS + 1000));
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["vana"]["second"], 25);
        assert_eq!(json["vana"]["weekday"], "Firesday");
    }
}
