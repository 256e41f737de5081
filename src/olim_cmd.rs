//! Olim command: select congregants for the Sabbath of a date.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use gabbai_olim::{CongregantRecord, MatchResult, parse_iso_date, resolve_with};

use crate::cli::OlimArgs;
use crate::config::GabbaiConfig;
use crate::convert;
use crate::parasha_cmd::hebrew_date_in;

/// Run the olim query.
pub fn run(args: OlimArgs) -> Result<()> {
    let _cmd = info_span!("olim").entered();
    // The library treats a bad date as "no olim"; the CLI reports it.
    parse_iso_date(&args.date).with_context(|| format!("bad --date {:?}", args.date))?;

    let config = GabbaiConfig::load(args.reading.config.as_deref())?;
    let query_cfg = convert::build_query_config(&config, &args.reading)?;

    let json = std::fs::read_to_string(&args.records)
        .with_context(|| format!("failed to read records: {}", args.records.display()))?;
    let records: Vec<CongregantRecord> = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse records: {}", args.records.display()))?;
    info!(n_records = records.len(), "records loaded");

    let report = resolve_with(&records, &args.date, &query_cfg)
        .context("failed to resolve the Sabbath reading")?;

    for exclusion in &report.exclusions {
        warn!(
            index = exclusion.index,
            name = %exclusion.full_name,
            reason = %exclusion.reason,
            "record excluded"
        );
    }

    if args.json {
        let out = serde_json::to_string_pretty(&report.matches)
            .context("failed to serialize matches")?;
        println!("{out}");
        return Ok(());
    }

    if let Some(sabbath) = &report.sabbath {
        let label = report.label.as_deref().unwrap_or("festival reading");
        let hebrew = hebrew_date_in(sabbath.hebrew, query_cfg.parasha().language());
        println!("{} ({hebrew}): {label}", sabbath.date);
    }
    if report.matches.is_empty() {
        println!("no olim");
    }
    for m in &report.matches {
        println!("{}\t{}", display_name(m), m.reason);
    }
    Ok(())
}

fn display_name(m: &MatchResult) -> String {
    match &m.father_name {
        Some(father) if !father.trim().is_empty() => format!("{} ben {father}", m.full_name),
        _ => m.full_name.clone(),
    }
}
