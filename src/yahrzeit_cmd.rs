//! Yahrzeit command: the next anniversary of a date of death.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use gabbai_calendar::{parse_iso_date, to_hebrew};
use gabbai_yahrzeit::next_anniversary;

use crate::cli::YahrzeitArgs;
use crate::config::GabbaiConfig;
use crate::convert;

/// Run the yahrzeit lookup.
pub fn run(args: YahrzeitArgs) -> Result<()> {
    let _cmd = info_span!("yahrzeit").entered();
    let death = parse_iso_date(&args.date).with_context(|| format!("bad --date {:?}", args.date))?;
    let from = match &args.from {
        Some(s) => parse_iso_date(s).with_context(|| format!("bad --from {s:?}"))?,
        None => Local::now().date_naive(),
    };

    let config = GabbaiConfig::load(args.config.as_deref())?;
    let policy = convert::build_adar_policy(&config.yahrzeit)?;

    let hebrew_death = to_hebrew(death).context("date of death precedes the Hebrew calendar")?;
    info!(%death, hebrew = %hebrew_death, %from, "looking up yahrzeit");

    let next = next_anniversary(death, from, &policy).context("failed to compute the yahrzeit")?;
    let hebrew_next = to_hebrew(next).context("yahrzeit beyond the Hebrew calendar")?;
    println!("{next} ({hebrew_next})");
    Ok(())
}
