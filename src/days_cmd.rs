//! Days command: Vana'diel date to Earth day count and rotation slot.

use std::num::NonZeroU32;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info_span};

use vana_calendar::{VanaDate, Weekday, rotation_index};

use crate::cli::DaysArgs;
use crate::state::CalculatorState;

#[derive(Debug, Serialize)]
struct DaysReport {
    date: VanaDate,
    weekday: Weekday,
    vana_days_since_epoch: i128,
    earth_days: i128,
    /// Earth start of the date in epoch ms, absent when out of range.
    earth_start_ms: Option<i64>,
    earth_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rotation: Option<RotationSlot>,
}

#[derive(Debug, Serialize)]
struct RotationSlot {
    period: u32,
    index: u32,
}

fn report(date: VanaDate, period: Option<NonZeroU32>) -> DaysReport {
    let count = date.day_count();
    let start = date.earth_instant();
    DaysReport {
        date,
        weekday: date.weekday(),
        vana_days_since_epoch: count.vana_days_since_epoch,
        earth_days: count.earth_days,
        earth_start_ms: start.map(|i| i.millis()),
        earth_start: start.map(|i| i.to_string()),
        rotation: period.map(|p| RotationSlot {
            period: p.get(),
            index: rotation_index(count.earth_days, p),
        }),
    }
}

/// Print the day counts for the requested date (or the calculator date).
pub fn run(args: DaysArgs, state: CalculatorState) -> Result<()> {
    let _cmd = info_span!("days").entered();

    let date = args.date.unwrap_or(state.date);
    let report = report(date, args.period);
    debug!(%date, earth_days = %report.earth_days, "computed day count");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Date:        {} {}", report.date, report.weekday);
    println!("Vana'diel days since epoch: {}", report.vana_days_since_epoch);
    println!("Earth days since epoch:     {}", report.earth_days);
    match &report.earth_start {
        Some(start) => println!("Earth start: {start}"),
        None => println!("Earth start: out of range"),
    }
    if let Some(slot) = &report.rotation {
        println!("Rotation:    day {} of {}", slot.index, slot.period);
    }
    Ok(())
}
