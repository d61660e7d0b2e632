//! Share-link query strings: `pattern=<id>&timestamp=<earth ms>[&guild=<id>]`.
//!
//! The timestamp is the Earth instant at which the calculator date begins,
//! so decoding it with `earth_to_vana` gives the same date back.

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use vana_calendar::{EarthInstant, earth_to_vana};
use vana_guild::Guild;

use crate::convert;
use crate::state::CalculatorState;

/// Encodes the calculator state as a query string (without the leading `?`).
pub fn encode(state: &CalculatorState) -> Result<String> {
    let instant = state
        .date
        .earth_instant()
        .ok_or_else(|| anyhow!("date {} is outside the Earth timestamp range", state.date))?;
    let mut query = format!("pattern={}&timestamp={}", state.pattern.id(), instant.millis());
    if let Some(guild) = state.guild {
        query.push_str(&format!("&guild={}", guild.id()));
    }
    Ok(query)
}

/// Applies a query string (or a full URL containing one) on top of `base`.
///
/// Unknown keys and empty values are ignored.
pub fn decode(link: &str, base: CalculatorState) -> Result<CalculatorState> {
    let query = link.split_once('?').map_or(link, |(_, q)| q);
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    let mut state = base;
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if value.is_empty() {
            continue;
        }
        match key {
            "pattern" => {
                let id: u8 = value
                    .parse()
                    .with_context(|| format!("invalid pattern in link: {value:?}"))?;
                state.pattern = convert::parse_pattern(id)?;
            }
            "timestamp" => {
                let ms: i64 = value
                    .parse()
                    .with_context(|| format!("invalid timestamp in link: {value:?}"))?;
                state.date = earth_to_vana(EarthInstant::from_millis(ms)).date();
            }
            "guild" => {
                let id: u32 = value
                    .parse()
                    .with_context(|| format!("invalid guild in link: {value:?}"))?;
                state.guild = Some(Guild::from_id(id)?);
            }
            other => debug!(key = other, "ignoring unknown link parameter"),
        }
    }
    Ok(state)
}
