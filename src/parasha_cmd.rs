//! Parasha command: the weekly reading for a date, or for a whole year.

use anyhow::{Context, Result};
use tracing::info_span;

use gabbai_calendar::{HebrewDate, parse_iso_date};
use gabbai_parasha::{Language, SabbathReading, resolve_sabbath, year_readings};

use crate::cli::ParashaArgs;
use crate::config::GabbaiConfig;
use crate::convert;

/// Run the parasha lookup.
pub fn run(args: ParashaArgs) -> Result<()> {
    let _cmd = info_span!("parasha").entered();
    let date = parse_iso_date(&args.date).with_context(|| format!("bad --date {:?}", args.date))?;
    let config = GabbaiConfig::load(args.reading.config.as_deref())?;
    let parasha_cfg = convert::build_parasha_config(&config.parasha, &args.reading)?;

    let resolved =
        resolve_sabbath(date, &parasha_cfg).context("failed to resolve the Sabbath reading")?;
    if !args.year {
        println!("{}", format_row(&resolved, parasha_cfg.language()));
        return Ok(());
    }

    let year = resolved.hebrew.year();
    let readings = year_readings(year, parasha_cfg.location())
        .with_context(|| format!("failed to build readings for {year}"))?;
    for reading in &readings {
        println!("{}", format_row(reading, parasha_cfg.language()));
    }
    Ok(())
}

fn format_row(sabbath: &SabbathReading, language: Language) -> String {
    let label = sabbath
        .reading
        .map(|r| r.label(language))
        .unwrap_or_else(|| "(festival)".to_string());
    format!(
        "{}\t{}\t{label}",
        sabbath.date,
        hebrew_date_in(sabbath.hebrew, language)
    )
}

/// Renders a Hebrew date in the same language as the reading labels.
pub(crate) fn hebrew_date_in(date: HebrewDate, language: Language) -> String {
    match language {
        Language::English => date.to_string(),
        Language::Hebrew => date.hebrew_label(),
    }
}
