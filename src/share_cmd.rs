//! Share command: print a query string that restores the calculator state.

use anyhow::Result;
use tracing::info_span;

use crate::cli::ShareArgs;
use crate::convert;
use crate::share;
use crate::state::CalculatorState;

/// Print the share query string, optionally appended to a base URL.
pub fn run(args: ShareArgs, base: CalculatorState) -> Result<()> {
    let _cmd = info_span!("share").entered();

    let guild = args.guild.map(convert::parse_guild).transpose()?;
    let state = base.with_overrides(args.date, args.pattern, guild);
    let query = share::encode(&state)?;
    match args.url {
        Some(url) => println!("{}?{query}", url.trim_end_matches('?')),
        None => println!("{query}"),
    }
    Ok(())
}
